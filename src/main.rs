use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use reading_coach_lib::chunking::{estimate_total_minutes, segment, PacingPolicy, ReadingMode};
use reading_coach_lib::grading::{AiReply, FallbackStrategy};
use reading_coach_lib::library;
use reading_coach_lib::passage_loader::PassageLoader;
use reading_coach_lib::{CoachConfig, Passage};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reading Coach - 分段阅读与本地答案评分
#[derive(Parser, Debug)]
#[command(name = "reading-coach")]
#[command(version, about, long_about = None)]
struct Cli {
    /// 配置文件路径（JSON）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 把文章切成阅读分段
    Segment {
        /// 阅读模式：focus 或 flow
        #[arg(long)]
        mode: Option<ReadingMode>,
        /// 固定每段句数（覆盖阅读模式）
        #[arg(long)]
        fixed: Option<usize>,
        /// 内置文章 id
        #[arg(long, conflicts_with = "file")]
        passage: Option<String>,
        /// 文章文件
        file: Option<PathBuf>,
    },

    /// 对一道题的作答评分
    Grade {
        /// 题目 id（内置题目）
        #[arg(long)]
        question: String,
        /// 学生作答
        #[arg(long)]
        answer: String,
        /// AI 原始回复文件；缺省时直接本地评分
        #[arg(long)]
        reply: Option<PathBuf>,
    },

    /// 输出题目集合
    Questions {
        /// AI 原始回复文件；校验失败时使用内置题目
        #[arg(long)]
        reply: Option<PathBuf>,
    },

    /// 列出内置文章
    Passages,

    /// 下一篇内置文章（最后一篇之后回到第一篇）
    Next {
        /// 当前文章 id
        #[arg(long)]
        passage: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CoachConfig::load(cli.config.as_deref()).context("加载配置失败")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Command::Segment {
            mode,
            fixed,
            passage,
            file,
        } => run_segment(&config, mode, fixed, passage, file)?,
        Command::Grade {
            question,
            answer,
            reply,
        } => run_grade(&question, &answer, reply)?,
        Command::Questions { reply } => run_questions(reply)?,
        Command::Passages => run_passages(),
        Command::Next { passage } => summarize(library::next_passage(&passage)),
    };

    print_json(&output, config.pretty)
}

fn run_segment(
    config: &CoachConfig,
    mode: Option<ReadingMode>,
    fixed: Option<usize>,
    passage: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<serde_json::Value> {
    let (passage_id, text) = match (passage, file) {
        (Some(id), _) => (Some(id.clone()), library::passage(&id)?.text.clone()),
        (None, Some(path)) => {
            let text = PassageLoader::new()
                .load(&path)
                .with_context(|| format!("读取文章失败: {}", path.display()))?;
            (None, text)
        }
        (None, None) => {
            let passage = library::default_passage();
            (Some(passage.id.clone()), passage.text.clone())
        }
    };

    // 固定句数覆盖阅读模式，此时不报告模式与标签
    let (mode, policy) = match fixed {
        Some(0) => bail!("--fixed 必须大于 0"),
        Some(size) => (None, PacingPolicy::fixed(size)),
        None => {
            let mode = mode.unwrap_or(config.default_mode);
            (Some(mode), mode.policy())
        }
    };

    let chunks = segment(&text, policy);

    Ok(json!({
        "passageId": passage_id,
        "mode": mode,
        "label": mode.map(|m| m.preset().label),
        "policy": policy,
        "totalMinutes": estimate_total_minutes(&text),
        "chunks": chunks,
    }))
}

fn run_grade(
    question_id: &str,
    answer: &str,
    reply: Option<PathBuf>,
) -> anyhow::Result<serde_json::Value> {
    let question = library::question(question_id)?;
    let reply_text = read_reply(reply)?;

    let strategy = FallbackStrategy::new();
    let (graded, source) = strategy.grade(
        &question,
        answer,
        AiReply::from_option(reply_text.as_deref()),
    );

    Ok(json!({ "result": graded, "source": source }))
}

fn run_questions(reply: Option<PathBuf>) -> anyhow::Result<serde_json::Value> {
    let reply_text = read_reply(reply)?;
    let (questions, source) =
        FallbackStrategy::new().resolve_questions(AiReply::from_option(reply_text.as_deref()));

    Ok(json!({ "questions": questions, "source": source }))
}

fn run_passages() -> serde_json::Value {
    let catalogue: Vec<_> = library::passages().iter().map(summarize).collect();
    json!({ "passages": catalogue })
}

fn summarize(passage: &Passage) -> serde_json::Value {
    json!({
        "id": passage.id,
        "title": passage.title,
        "subtitle": passage.subtitle,
        "totalMinutes": estimate_total_minutes(&passage.text),
    })
}

fn read_reply(path: Option<PathBuf>) -> anyhow::Result<Option<String>> {
    path.map(|path| {
        fs::read_to_string(&path).with_context(|| format!("读取 AI 回复失败: {}", path.display()))
    })
    .transpose()
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
