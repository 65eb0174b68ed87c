//! 影集章節檔名
//!
//! 格式：`<Show> [(Year)] - S<season>E<chapter> [- <Chapter title> <Resolution>].<ext>`

use crate::tools::{RenameTarget, non_empty};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SEASON_EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s(\d{1,2})e(\d{1,3})").expect("Invalid regex"));

static CROSS_EPISODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d{1,2})x(\d{2,3})(?:\D|$)").expect("Invalid regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvShowChapter {
    pub src_file: PathBuf,
    pub show_title: String,
    /// 第 0 季視為特別篇
    pub season_number: u32,
    pub chapter_number: u32,
    pub show_year: Option<u32>,
    pub chapter_title: Option<String>,
    pub resolution: Option<String>,
    /// 不含前導點
    pub file_ext: Option<String>,
}

impl TvShowChapter {
    pub fn new(
        src_file: impl Into<PathBuf>,
        show_title: impl Into<String>,
        season_number: u32,
        chapter_number: u32,
    ) -> Self {
        Self {
            src_file: src_file.into(),
            show_title: show_title.into(),
            season_number,
            chapter_number,
            ..Self::default()
        }
    }
}

impl RenameTarget for TvShowChapter {
    fn source_file(&self) -> &Path {
        &self.src_file
    }

    fn has_required_data(&self) -> bool {
        !self.show_title.trim().is_empty() && self.chapter_number > 0
    }

    fn build_file_name(&self) -> String {
        let mut name = self.show_title.trim().to_string();

        if let Some(year) = self.show_year.filter(|y| *y > 0) {
            name.push_str(&format!(" ({year})"));
        }

        name.push_str(&format!(
            " - S{:02}E{:02}",
            self.season_number, self.chapter_number
        ));

        let details: Vec<&str> = [
            non_empty(self.chapter_title.as_deref()),
            non_empty(self.resolution.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !details.is_empty() {
            name.push_str(" - ");
            name.push_str(&details.join(" "));
        }

        if let Some(ext) = non_empty(self.file_ext.as_deref()) {
            name.push('.');
            name.push_str(ext.trim_start_matches('.'));
        }

        name
    }
}

/// 從檔名猜測季數與集數，支援 `S01E02` 與 `1x02`
#[must_use]
pub fn guess_episode(file_name: &str) -> Option<(u32, u32)> {
    let caps = SEASON_EPISODE_RE
        .captures(file_name)
        .or_else(|| CROSS_EPISODE_RE.captures(file_name))?;

    let season = caps.get(1)?.as_str().parse().ok()?;
    let chapter = caps.get(2)?.as_str().parse().ok()?;
    Some((season, chapter))
}
