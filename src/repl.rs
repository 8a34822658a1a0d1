use crate::search::{QueryRanker, ScoredResult};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Instant;

pub const PROMPT: &str = "Enter Search Query:";
const QUIT_COMMANDS: &[&str] = &[":q", ":quit"];

pub fn format_row(result: &ScoredResult) -> String {
    format!("{:<28} {:<35}{}", result.id, result.display_name, result.match_count)
}

/// Prompts, searches and prints until end of input or a quit command.
/// Returns how many queries were answered.
pub fn run<R: BufRead, W: Write>(ranker: &QueryRanker, mut input: R, out: &mut W) -> Result<usize> {
    let mut answered = 0;
    let mut line = String::new();

    loop {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        let started = Instant::now();
        let results = ranker.search(&line);
        let elapsed = started.elapsed();

        for result in &results {
            writeln!(out, "{}", format_row(result))?;
        }
        writeln!(out, "Completed in {}ms", elapsed.as_millis())?;
        answered += 1;
    }

    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_people;
    use std::io::Cursor;

    fn run_script(script: &str) -> (usize, String) {
        let ranker = QueryRanker::new(fixture_people());
        let mut out = Vec::new();
        let answered = run(&ranker, Cursor::new(script.as_bytes()), &mut out).unwrap();
        (answered, String::from_utf8(out).unwrap())
    }

    #[test]
    fn row_is_padded_into_columns() {
        let row = format_row(&ScoredResult {
            id: "01FAR5W5AZYWCRW9JNHM8N7C1".to_string(),
            display_name: "Alice Walker Jones".to_string(),
            match_count: 2,
        });
        assert_eq!(row.len(), 28 + 1 + 35 + 1);
        assert!(row.starts_with("01FAR5W5AZYWCRW9JNHM8N7C1    Alice Walker Jones"));
        assert!(row.ends_with(" 2"));
    }

    #[test]
    fn answers_until_end_of_input() {
        let (answered, output) = run_script("alice jones\nkurt\n");
        assert_eq!(answered, 2);
        assert!(output.contains("Alice Walker Jones"));
        assert!(output.contains("Kurt Jadyn Smitham"));
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert_eq!(output.matches("Completed in ").count(), 2);
    }

    #[test]
    fn quit_command_stops_loop() {
        let (answered, output) = run_script("brad\n:quit\nkurt\n");
        assert_eq!(answered, 1);
        assert!(!output.contains("Smitham"));
    }

    #[test]
    fn empty_line_prints_only_timing() {
        let (answered, output) = run_script("\n");
        assert_eq!(answered, 1);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], PROMPT);
        assert!(lines[1].starts_with("Completed in "));
    }
}
