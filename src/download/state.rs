//! Run statistics.

/// Counters for one archiving run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub patterns: u64,
    pub pattern_files: u64,
    pub classes: u64,
    pub archived_classes_skipped: u64,
    pub materials: u64,
    pub materials_skipped: u64,
    pub episodes: u64,
    pub captions: u64,
    pub bytes_downloaded: u64,
}

impl RunStats {
    /// Record a downloaded pattern file.
    pub fn add_pattern_file(&mut self, bytes: u64) {
        self.pattern_files += 1;
        self.bytes_downloaded += bytes;
    }

    /// Record a downloaded material.
    pub fn add_material(&mut self, bytes: u64) {
        self.materials += 1;
        self.bytes_downloaded += bytes;
    }

    /// Record a downloaded caption track.
    pub fn add_caption(&mut self, bytes: u64) {
        self.captions += 1;
        self.bytes_downloaded += bytes;
    }

    /// Get total number of files written.
    pub fn total_files(&self) -> u64 {
        self.pattern_files + self.materials + self.episodes + self.captions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let mut stats = RunStats::default();
        stats.add_pattern_file(10);
        stats.add_material(5);
        stats.add_caption(1);
        stats.episodes += 2;

        assert_eq!(stats.total_files(), 5);
        assert_eq!(stats.bytes_downloaded, 16);
    }
}
