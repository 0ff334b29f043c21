// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawl/clean).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of role/location combinations.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one results page is done, with the cards it yielded.
    fn page_done(&mut self, _role: &str, _location: &str, _page: u32, _cards: usize) {}

    /// Called after a batch reaches disk.
    fn flushed(&mut self, _saved: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints a running tally to stdout, for the console binaries.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    saved: usize,
    current: Option<(String, String)>,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Crawling {total} role/location combinations");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, role: &str, location: &str, page: u32, cards: usize) {
        let key = (s!(role), s!(location));
        if self.current.as_ref() != Some(&key) {
            self.done += 1;
            self.current = Some(key);
        }
        println!("[{}/{}] {role} @ {location} page {page}: {cards} cards", self.done, self.total);
    }

    fn flushed(&mut self, saved: usize) {
        self.saved += saved;
        println!("Saved {saved} records ({} total)", self.saved);
    }

    fn finish(&mut self) {
        println!("Done. {} records saved.", self.saved);
    }
}
