//! Prompt report rendering.
//!
//! The report is an instruction preamble for a downstream summarizer, a dated
//! header, one section per planned query, and a closing marker. Output depends
//! only on the [`ReportContext`] and the calls made on the builder.

use chrono::NaiveDate;

use thainews_core::{NormalizedEntry, ScanMode};
use thainews_feeds::BROAD_SCAN_CATEGORIES;

pub const NO_NEWS_MARKER: &str = "(no related news)";
pub const CLOSING_MARKER: &str = "========= END OF DATA =========";

/// Fixed inputs for one report.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub mode: &'a ScanMode,
    pub window_label: &'a str,
    pub run_date: NaiveDate,
    /// Language the summarizer should answer in.
    pub language: &'a str,
}

/// Incrementally assembles a report in plan order.
#[derive(Debug)]
pub struct ReportBuilder {
    out: String,
}

impl ReportBuilder {
    /// Start a report with the preamble and dated header already written.
    #[must_use]
    pub fn new(ctx: &ReportContext<'_>) -> Self {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&instruction_preamble(ctx.mode, ctx.window_label));
        out.push_str(&format!(
            "\nAnswer in **{language}**, as a **Markdown** bulleted list, in a professional and readable style.\n\
             \n========= NEWS DATABASE ({date}) =========\n",
            language = ctx.language,
            date = ctx.run_date.format("%Y-%m-%d"),
        ));
        Self { out }
    }

    /// Open the section for one query.
    pub fn section(&mut self, category: &str) {
        self.out.push_str(&format!("\n## [{category}]\n"));
    }

    pub fn entry(&mut self, entry: &NormalizedEntry) {
        self.out.push_str(&format!(
            "- [{date}] [{source}] {title}\n  Link: {link}\n",
            date = entry.date,
            source = entry.source,
            title = entry.title,
            link = entry.link,
        ));
    }

    pub fn no_news(&mut self) {
        self.out.push_str(NO_NEWS_MARKER);
        self.out.push('\n');
    }

    pub fn fetch_failed(&mut self, message: &str) {
        self.out.push_str(&format!("(fetch failed: {message})\n"));
    }

    #[must_use]
    pub fn finish(mut self) -> String {
        self.out.push('\n');
        self.out.push_str(CLOSING_MARKER);
        self.out
    }
}

fn instruction_preamble(mode: &ScanMode, window_label: &str) -> String {
    match mode {
        ScanMode::DeepDive { keyword } => format!(
            "Act as a senior industry analyst.\n\
             Below are the news items I collected for the keyword [{keyword}] over the past {window_label}.\n\
             \n\
             Read them and write an in-depth topic analysis report:\n\
             \n\
             ### 1. Executive Summary\n\
             \x20  - Summarize the most important developments concerning \"{keyword}\".\n\
             \n\
             ### 2. Market and Business Impact\n\
             \x20  - What concrete impact do these stories have on the company or its industry supply chain?\n\
             \x20  - Are there signals of capacity expansion, mergers and acquisitions, or policy changes?\n\
             \n\
             ### 3. Opportunities and Risks\n\
             \x20  - What opportunities or risks should investors or competitors watch?\n\
             \n\
             (If the news has little to do with the keyword, say plainly: \"Too much noise, no substantive developments.\")\n"
        ),
        ScanMode::BroadScan => {
            let [general, electronics, bilateral] = BROAD_SCAN_CATEGORIES.map(|c| c.name);
            format!(
                "Act as a senior Southeast Asia industry and economics analyst.\n\
                 Below is my programmatically collected [{window_label} Thailand PCB and electronics industry news database].\n\
                 \n\
                 Read the news and organize and analyze it along these lines:\n\
                 \n\
                 ### 1. {general}\n\
                 \x20  - Focus: political developments, major economic policy, public safety.\n\
                 \x20  - List the 3-5 most influential events.\n\
                 \n\
                 ### 2. {electronics}\n\
                 \x20  - Focus: new plants, supply-chain relocation, large investment projects.\n\
                 \x20  - Analyze the significance for the global supply chain.\n\
                 \n\
                 ### 3. {bilateral}\n\
                 \x20  - Focus: Taiwanese corporate investment, bilateral trade, geopolitics.\n\
                 \x20  - Point out opportunities and risks for Taiwanese businesses.\n"
            )
        }
    }
}
