//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use tilecollage::io::progress::ProgressManager;

    // Tests completed collages advance the position
    #[test]
    fn test_hidden_progress_counts() {
        let progress = ProgressManager::hidden(3);
        assert_eq!(progress.position(), 0);

        progress.start_collage("hstitch");
        progress.complete_collage();
        progress.start_collage("equi");
        progress.complete_collage();

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests a visible manager accepts the same calls
    #[test]
    fn test_visible_progress_counts() {
        let progress = ProgressManager::new(1);
        progress.start_collage("circmerge");
        progress.complete_collage();
        assert_eq!(progress.position(), 1);
        progress.finish();
    }
}
