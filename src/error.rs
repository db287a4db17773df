use thiserror::Error;

/// Reading Coach 统一错误类型
///
/// 分段与本地评分本身是全函数，不会失败；
/// 只有外部输入（AI 回复、配置文件、文章文件、命令行参数）会走到这里。
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("未知的阅读模式: {0}")]
    UnknownMode(String),
    #[error("AI 回复中没有 JSON 对象")]
    NoJsonObject,
    #[error("JSON 解析失败: {0}")]
    MalformedJson(String),
    #[error("回复结构校验失败: {0}")]
    Schema(String),
    #[error("找不到文章: {0}")]
    UnknownPassage(String),
    #[error("找不到题目: {0}")]
    UnknownQuestion(String),
    #[error("配置文件错误: {0}")]
    Config(String),
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
