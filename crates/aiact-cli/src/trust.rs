//! # Trust CLI: Render the trust-center page.
//!
//! Shows roadmap completion over the whole catalog next to the fixed
//! uptime, compliance score, service health, deployment log and recent
//! commits.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aiact_core::{localize, Language};
use aiact_roadmap::trust::{TrustFeed, TrustOverview};

/// Trust subcommand arguments.
#[derive(Args, Debug)]
pub struct TrustArgs {
    /// Display language.
    #[arg(long, default_value = "ko")]
    pub lang: Language,

    /// Catalog document to read instead of the built-in catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute the trust subcommand.
pub fn run_trust(args: &TrustArgs) -> Result<u8> {
    let catalog = crate::load_catalog(args.catalog.as_deref())?;
    let feed = TrustFeed::builtin().context("built-in trust feed is invalid")?;
    let overview = TrustOverview::for_catalog(&catalog);
    let report = TrustReport {
        overview: &overview,
        feed: &feed,
        lang: args.lang,
    };
    print!("{report}");
    Ok(0)
}

/// Render the trust-center page as text in `lang`.
pub fn render_trust(overview: &TrustOverview, feed: &TrustFeed, lang: Language) -> String {
    TrustReport {
        overview,
        feed,
        lang,
    }
    .to_string()
}

/// Text report of the trust-center page.
pub struct TrustReport<'a> {
    pub overview: &'a TrustOverview,
    pub feed: &'a TrustFeed,
    pub lang: Language,
}

impl fmt::Display for TrustReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (overview, feed, lang) = (self.overview, self.feed, self.lang);
        let r = &overview.roadmap;

        writeln!(f, "{}", lang.pick("시스템 현황", "System Overview"))?;
        writeln!(
            f,
            "  {}: {}%",
            lang.pick("로드맵 완료율", "Roadmap Completion"),
            overview.completion_percent
        )?;
        writeln!(f, "  {}: {}", lang.pick("가동 시간", "Uptime"), overview.uptime)?;
        writeln!(
            f,
            "  {}: {}",
            lang.pick("준수 점수", "Compliance Score"),
            overview.compliance_score
        )?;
        writeln!(
            f,
            "  {}: {} {}",
            lang.pick("시스템 상태", "System Status"),
            overview.system_status.icon(),
            overview.system_status.label(lang)
        )?;

        writeln!(f)?;
        writeln!(f, "{}", lang.pick("로드맵 진행 상황", "Roadmap Progress"))?;
        writeln!(
            f,
            "  {}: {}",
            lang.pick("전체 진행률", "Overall Progress"),
            progress_bar(overview.completion_percent)
        )?;
        writeln!(
            f,
            "  {}: {}  {}: {}  {}: {}",
            lang.pick("완료", "Completed"),
            r.launched,
            lang.pick("진행 중", "In Progress"),
            r.in_progress,
            lang.pick("계획됨", "Planned"),
            r.planned,
        )?;

        writeln!(f)?;
        writeln!(f, "{}", lang.pick("실시간 상태", "Live Status"))?;
        for service in &feed.services {
            writeln!(
                f,
                "  {} {}  {}  {} {}",
                service.status.icon(),
                localize(&service.name, lang),
                service.status.label(lang),
                lang.pick("가동률", "Uptime"),
                service.uptime
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", lang.pick("최근 배포", "Recent Deployments"))?;
        for d in &feed.deployments {
            writeln!(
                f,
                "  {} {}  {}  {}: {}  [{}]",
                d.status.icon(),
                localize(&d.title, lang),
                d.timestamp.format_localized(lang),
                lang.pick("배포 시간", "Duration"),
                d.duration,
                d.environment
            )?;
        }

        if !feed.commits.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", lang.pick("최근 커밋", "Recent Commits"))?;
            for c in &feed.commits {
                writeln!(
                    f,
                    "  {}  {}  {}  {}",
                    c.hash,
                    localize(&c.message, lang),
                    c.author,
                    localize(&c.age, lang)
                )?;
            }
        }
        Ok(())
    }
}

/// Twenty-cell bar followed by the percentage, e.g. `[#####...............] 25%`.
fn progress_bar(percent: u8) -> String {
    const WIDTH: usize = 20;
    let filled = (usize::from(percent.min(100)) * WIDTH + 50) / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(WIDTH - filled)
    )
}
