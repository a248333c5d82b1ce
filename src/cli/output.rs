//! Output formatting utilities

use crate::domain::timer::format_clock;
use crate::domain::{CountdownTimer, JournalEntry, Mood, MoodEntry, MoodStats, TimerPreset};
use chrono::{DateTime, Local, Utc};

const PROGRESS_WIDTH: usize = 30;

fn long_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%A, %B %-d, %Y %H:%M")
        .to_string()
}

fn short_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%b %-d, %H:%M")
        .to_string()
}

/// Format a single journal entry with its header line
pub fn format_journal_entry(entry: &JournalEntry) -> String {
    let mut output = format!("[{}]  {}", entry.id, long_date(entry.created_at));
    if entry.updated_at != entry.created_at {
        output.push_str("  (edited)");
    }
    output.push('\n');
    output.push_str(&entry.text);
    output.push('\n');
    output
}

/// Format journal entries for display
pub fn format_journal_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "Your journal is waiting. Try 'lounge journal add <text>'".to_string();
    }

    entries
        .iter()
        .map(format_journal_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format mood history, newest first
pub fn format_mood_history(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No moods logged yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} {:<9} {}\n",
            entry.mood.icon(),
            entry.mood.label(),
            short_date(entry.timestamp)
        ));
        if !entry.note.is_empty() {
            output.push_str(&format!("   {}\n", entry.note));
        }
    }
    output
}

/// Format mood stats
pub fn format_mood_stats(stats: &MoodStats) -> String {
    if stats.count == 0 {
        return "No moods logged yet".to_string();
    }

    let current = stats.current.map(|m| m.label()).unwrap_or("Unknown");
    format!(
        "Moods logged:   {}\nPositive vibes: {}%\nCurrent mood:   {}\n",
        stats.count, stats.positive_percent, current
    )
}

/// Format the list of moods that can be logged
pub fn format_mood_choices() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!(
            "{} {:<9} {:<9} {}\n",
            mood.icon(),
            mood.id(),
            mood.label(),
            mood.description()
        ));
    }
    output
}

/// Format the timer presets table
pub fn format_presets() -> String {
    let mut output = String::new();
    for preset in TimerPreset::ALL {
        output.push_str(&format!(
            "{} {:<13} {:>3} min  ({})\n",
            preset.icon(),
            preset.label(),
            preset.minutes(),
            preset.slug()
        ));
    }
    output
}

/// Progress bar, clock and status line for a countdown
pub fn format_timer_line(timer: &CountdownTimer) -> String {
    let filled = (timer.progress() * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}] {}  {}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        format_clock(timer.remaining_seconds()),
        timer.status_line()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn entry(id: u64, text: &str) -> JournalEntry {
        JournalEntry::new(id, text.to_string(), Utc.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_format_empty_journal() {
        let output = format_journal_list(&[]);
        assert!(output.contains("Your journal is waiting"));
    }

    #[test]
    fn test_format_journal_list() {
        let entries = vec![entry(2, "second"), entry(1, "first")];
        let output = format_journal_list(&entries);

        assert!(output.contains("[2]"));
        assert!(output.contains("second"));
        assert!(output.contains("2025"));
        assert!(output.find("second").unwrap() < output.find("first").unwrap());
    }

    #[test]
    fn test_edited_marker() {
        let mut e = entry(1, "first");
        assert!(!format_journal_entry(&e).contains("(edited)"));
        e.revise("changed".to_string(), e.created_at + Duration::minutes(3));
        assert!(format_journal_entry(&e).contains("(edited)"));
    }

    #[test]
    fn test_format_mood_history() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let entries = vec![
            MoodEntry::new(Mood::Calm, "tea".to_string(), ts),
            MoodEntry::new(Mood::Tired, String::new(), ts),
        ];
        let output = format_mood_history(&entries);

        assert!(output.contains("😌 Calm"));
        assert!(output.contains("   tea\n"));
        assert!(output.contains("😴 Tired"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_format_mood_stats() {
        let stats = MoodStats {
            count: 4,
            positive_percent: 75,
            current: Some(Mood::Happy),
        };
        let output = format_mood_stats(&stats);
        assert!(output.contains("Moods logged:   4"));
        assert!(output.contains("Positive vibes: 75%"));
        assert!(output.contains("Current mood:   Happy"));
    }

    #[test]
    fn test_format_presets() {
        let output = format_presets();
        assert!(output.contains("Quick Break"));
        assert!(output.contains("30 min"));
        assert!(output.contains("(power-nap)"));
    }

    #[test]
    fn test_timer_line() {
        let mut timer = CountdownTimer::new(4);
        assert_eq!(
            format_timer_line(&timer),
            format!("[{}] 00:04  Ready to unwind?", "-".repeat(30))
        );

        timer.start();
        for _ in 0..4 {
            timer.tick();
        }
        assert_eq!(
            format_timer_line(&timer),
            format!("[{}] 00:00  Time to rest more!", "#".repeat(30))
        );
    }
}
