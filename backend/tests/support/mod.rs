#![allow(dead_code)]

use podcast_insights::api::{EpisodeNumber, RawRow};
use podcast_insights::io::CSV_COLUMNS;

/// Row with every metric zeroed except downloads and completions.
pub fn row(episode: u64, downloads: u64, completions: u64) -> RawRow {
    RawRow {
        episode: EpisodeNumber(episode),
        title: format!("Episode {}", episode),
        description: String::new(),
        guest: None,
        duration: "00:00:00".to_string(),
        downloads,
        completions,
        new_listeners: 0,
        returning_listeners: 0,
        subscribers_gained: 0,
        social_shares: 0,
    }
}

/// Ten episodes with downloads 10, 20, ..., 100.
pub fn ten_episode_rows() -> Vec<RawRow> {
    (1..=10).map(|i| row(i, i * 10, i * 5)).collect()
}

/// A realistic CSV body with mixed guests, durations and quoting.
pub fn sample_csv() -> String {
    let mut content = CSV_COLUMNS.join(",");
    let rows = [
        "1,Pilot,\"Why we started, and where we're going\",,00:32:10,1200,780,900,300,40,15",
        "2,Deep Work,Focus in practice,Cal N.,1:05:00,1500,900,700,800,55,22",
        "3,Remote Teams,,Ana P.,00:48:30,1350,910,500,850,38,12",
        "4,Burnout,Recognising the signs,,00:41:05,1800,1300,820,980,70,31",
        "5,Q&A,Listener questions,,00:25:00,1100,950,300,800,20,9",
        "6,Habits,,James C.,00:55:45,2100,1400,1000,1100,90,40",
    ];
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

/// CSV body built from `(episode, downloads, completions)` triples.
pub fn csv_from(rows: &[(u64, u64, u64)]) -> String {
    let mut content = CSV_COLUMNS.join(",");
    for (episode, downloads, completions) in rows {
        content.push_str(&format!(
            "\n{},Episode {},,,00:00:00,{},{},0,0,0,0",
            episode, episode, downloads, completions
        ));
    }
    content
}
