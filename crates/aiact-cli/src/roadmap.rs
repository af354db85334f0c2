//! # Roadmap CLI: Render the filtered roadmap.
//!
//! ```bash
//! aiact roadmap                                # everything, Korean
//! aiact roadmap --tab Q4-2025 --lang en        # one quarter
//! aiact roadmap --status Planned --type Feature
//! aiact roadmap --json                         # view-model as JSON
//! ```
//!
//! The "all" tab prints only quarters that have entries. A specific tab
//! always prints its quarter, with a placeholder line when it is empty.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aiact_core::{localize, Language, Quarter};
use aiact_roadmap::{FilterSelection, QuarterTab, RoadmapEntry, RoadmapView};

/// Roadmap subcommand arguments.
#[derive(Args, Debug)]
pub struct RoadmapArgs {
    /// Quarter tab: `all` or a quarter label (Q3-2025, Q4-2025, Q1-2026,
    /// Q2-2026, Future).
    #[arg(long, default_value = "all")]
    pub tab: String,

    /// Only entries of this type (Feature, Bug, Enhancement).
    #[arg(long = "type", default_value = "")]
    pub item_type: String,

    /// Only entries of this workstream.
    #[arg(long, default_value = "")]
    pub workstream: String,

    /// Only entries with this status (Planned, In Progress, Launched, Closed).
    #[arg(long, default_value = "")]
    pub status: String,

    /// Display language.
    #[arg(long, default_value = "ko")]
    pub lang: Language,

    /// Include descriptions, dates and links.
    #[arg(long)]
    pub details: bool,

    /// Print the view-model as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Catalog document to read instead of the built-in catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl RoadmapArgs {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::parse(&self.tab, &self.item_type, &self.workstream, &self.status)
    }
}

/// Execute the roadmap subcommand.
pub fn run_roadmap(args: &RoadmapArgs) -> Result<u8> {
    let catalog = crate::load_catalog(args.catalog.as_deref())?;
    let selection = args.selection();
    tracing::debug!(?selection, "rendering roadmap");

    let view = RoadmapView::build(&catalog, selection);
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("failed to serialize view")?;
        println!("{json}");
    } else {
        let report = RoadmapReport {
            view: &view,
            lang: args.lang,
            details: args.details,
        };
        print!("{report}");
    }
    Ok(0)
}

/// Render `view` as text in `lang`.
pub fn render_roadmap(view: &RoadmapView<'_>, lang: Language, details: bool) -> String {
    RoadmapReport {
        view,
        lang,
        details,
    }
    .to_string()
}

/// Text report of one roadmap view.
pub struct RoadmapReport<'v, 'a> {
    pub view: &'v RoadmapView<'a>,
    pub lang: Language,
    pub details: bool,
}

impl fmt::Display for RoadmapReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lang = self.lang;
        let s = &self.view.summary;

        writeln!(f, "{}", lang.pick("로드맵", "Roadmap"))?;
        writeln!(f, "{}", tab_bar(&self.view.selection.quarter_tab, lang))?;
        writeln!(
            f,
            "{}: {}  {}: {}  {}: {}  {}: {}  ({} {}%)",
            lang.pick("총 항목", "Total Items"),
            s.total,
            lang.pick("완료", "Launched"),
            s.launched,
            lang.pick("진행 중", "In Progress"),
            s.in_progress,
            lang.pick("계획됨", "Planned"),
            s.planned,
            lang.pick("진행률", "Progress"),
            s.completion_percent(),
        )?;

        match &self.view.selection.quarter_tab {
            QuarterTab::All => {
                for bucket in self.view.quarters.non_empty() {
                    self.write_quarter(f, &bucket.quarter, &bucket.items)?;
                }
            }
            QuarterTab::Only(quarter) => {
                let items = self.view.quarters.get(quarter).unwrap_or(&[]);
                self.write_quarter(f, quarter, items)?;
            }
        }
        Ok(())
    }
}

impl RoadmapReport<'_, '_> {
    fn write_quarter(
        &self,
        f: &mut fmt::Formatter<'_>,
        quarter: &Quarter,
        items: &[&RoadmapEntry],
    ) -> fmt::Result {
        let lang = self.lang;
        writeln!(f)?;
        writeln!(
            f,
            "== {} ({} {}) ==",
            quarter.title(lang),
            items.len(),
            lang.pick("항목", "items")
        )?;
        if items.is_empty() {
            return writeln!(
                f,
                "  {}",
                lang.pick(
                    "이 분기에 계획된 항목이 없습니다.",
                    "No items planned for this quarter."
                )
            );
        }
        for entry in items {
            self.write_entry(f, entry)?;
        }
        Ok(())
    }

    fn write_entry(&self, f: &mut fmt::Formatter<'_>, entry: &RoadmapEntry) -> fmt::Result {
        let lang = self.lang;
        writeln!(
            f,
            "  - [{}] {}",
            entry.status.label(lang),
            localize(&entry.title, lang)
        )?;
        // Korean view repeats the English title underneath.
        if lang == Language::Ko {
            writeln!(f, "    {}", entry.title.en)?;
        }

        let mut tags = vec![
            entry.item_type.label(lang).to_string(),
            entry.workstream.clone(),
            entry.quarter.as_str().to_string(),
        ];
        tags.extend(entry.labels.iter().cloned());
        writeln!(f, "    {}", tags.join(" | "))?;

        if !self.details {
            return Ok(());
        }
        writeln!(
            f,
            "    {}: {}",
            lang.pick("상세 설명", "Description"),
            localize(&entry.description, lang)
        )?;
        writeln!(
            f,
            "    {}: {}  {}: {}",
            lang.pick("생성일", "Created"),
            entry.created_at.format_date(lang),
            lang.pick("업데이트", "Updated"),
            entry.updated_at.format_date(lang),
        )?;
        if let Some(link) = &entry.github_link {
            writeln!(f, "    GitHub: {link}")?;
        }
        Ok(())
    }
}

/// `[전체 보기] Q3-2025 ... 미래 계획` with the active tab bracketed.
fn tab_bar(active: &QuarterTab, lang: Language) -> String {
    QuarterTab::tabs()
        .iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab.title(lang))
            } else {
                tab.title(lang).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
