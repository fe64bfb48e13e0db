/// The interactive terminal oracle.
///
/// Presents each comparison as a numbered prompt and blocks until the user
/// picks a side. `i` prints both track lists (metadata inspection is this
/// oracle's own affordance; the sorter never sees it), `q` or end-of-input
/// aborts the session. Streams are injected so tests drive the prompt loop
/// headlessly.
use std::io::{BufRead, Write};

use tierlist_core::{ComparatorOracle, Item, Verdict};

/// How many track titles to show before truncating with a "+n more" tail.
const TRACK_PREVIEW_LIMIT: usize = 10;

pub struct TerminalOracle<R, W> {
    input: R,
    output: W,
    estimated_total: usize,
    answered: usize,
}

impl<R: BufRead, W: Write> TerminalOracle<R, W> {
    pub fn new(input: R, output: W, estimated_total: usize) -> Self {
        TerminalOracle {
            input,
            output,
            estimated_total,
            answered: 0,
        }
    }

    /// Comparisons answered so far.
    pub fn answered(&self) -> usize {
        self.answered
    }

    fn print_album(&mut self, item: &Item) {
        let _ = writeln!(self.output, "  {} - {}  ({} tracks)", item.name, item.artist, item.tracks.len());
        if let Some(url) = &item.url {
            let _ = writeln!(self.output, "  {url}");
        }
    }

    fn print_tracks(&mut self, item: &Item) {
        let _ = writeln!(self.output, "{}:", item.name);
        for track in item.tracks.iter().take(TRACK_PREVIEW_LIMIT) {
            let _ = writeln!(self.output, "   - {track}");
        }
        if item.tracks.len() > TRACK_PREVIEW_LIMIT {
            let _ = writeln!(self.output, "   ...(+{} more)", item.tracks.len() - TRACK_PREVIEW_LIMIT);
        }
        if item.tracks.is_empty() {
            let _ = writeln!(self.output, "   (no track list)");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None, // end of input
            Ok(_) => Some(line.trim().to_lowercase()),
            Err(_) => None,
        }
    }
}

impl<R: BufRead, W: Write> ComparatorOracle for TerminalOracle<R, W> {
    fn compare(&mut self, a: &Item, b: &Item) -> Verdict {
        loop {
            let remaining = self.estimated_total.saturating_sub(self.answered);
            let _ = writeln!(
                self.output,
                "\n=== Comparison {} of ~{} ({} remaining) ===",
                self.answered + 1,
                self.estimated_total,
                remaining,
            );
            let _ = writeln!(self.output, "Which album do you prefer?");
            let _ = writeln!(self.output, " [1]");
            self.print_album(a);
            let _ = writeln!(self.output, " [2]");
            self.print_album(b);
            let _ = write!(self.output, "Choose 1/2 (or 'i' for track lists, 'q' to quit): ");
            let _ = self.output.flush();

            let Some(choice) = self.read_line() else {
                return Verdict::Abort;
            };
            match choice.as_str() {
                "1" => {
                    self.answered += 1;
                    return Verdict::First;
                }
                "2" => {
                    self.answered += 1;
                    return Verdict::Second;
                }
                "i" => {
                    let _ = writeln!(self.output, "\n--- Track lists ---");
                    self.print_tracks(a);
                    let _ = writeln!(self.output);
                    self.print_tracks(b);
                    let _ = writeln!(self.output, "-------------------");
                }
                "q" => return Verdict::Abort,
                _ => {
                    let _ = writeln!(self.output, "Invalid input. Try again.");
                }
            }
        }
    }
}
