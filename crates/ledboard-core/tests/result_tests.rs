#[cfg(test)]
mod tests {
    use ledboard_core::result::{
        probe_status, CommandOutput, LaunchStatus, OperationResult, MARKER_LAUNCHED,
        MARKER_STOPPED, PROBE_PREFIX,
    };

    fn output(stdout: &str, stderr: &str, exit_code: i32) -> CommandOutput {
        CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
        }
    }

    #[test]
    fn test_outputs_concatenate_in_order() {
        let result = OperationResult::from_outputs(
            &[
                output("first\n", "", 0),
                output("second\n", "warn-a\n", 0),
                output("third", "warn-b", 1),
            ],
            LaunchStatus::Failed,
        );

        assert_eq!(result.stdout, "first\nsecond\nthird");
        assert_eq!(result.stderr, "warn-a\nwarn-b");
        assert_eq!(result.exit_code, 1);
        assert!(!result.started);
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let result = OperationResult::from_outputs(
            &[output("", "", 0), output("only\n", "", 0), output("", "", 0)],
            LaunchStatus::Started,
        );

        assert_eq!(result.stdout, "only");
        assert_eq!(result.stderr, "");
        assert!(result.started);
    }

    #[test]
    fn test_no_outputs_is_a_clean_result() {
        let result = OperationResult::from_outputs(&[], LaunchStatus::Unknown);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "");
    }

    #[test]
    fn test_diagnostics_strips_marker_lines() {
        let stdout = format!(
            "{}\n{}\nTraceback (most recent call last):\n  ImportError: no module named neopixel\n{}1",
            MARKER_STOPPED, MARKER_LAUNCHED, PROBE_PREFIX
        );
        let result = OperationResult::from_outputs(
            &[output(&stdout, "some stderr text", 0)],
            LaunchStatus::Failed,
        );

        let diag = result.diagnostics();
        assert!(!diag.contains("__CTL__"));
        assert!(!diag.contains(PROBE_PREFIX));
        assert!(diag.contains("Traceback"));
        assert!(diag.contains("ImportError: no module named neopixel"));
        assert!(diag.contains("some stderr text"));
    }

    #[test]
    fn test_probe_status_maps_pgrep_exit_codes() {
        assert_eq!(probe_status("__PROBE__:0"), LaunchStatus::Started);
        assert_eq!(probe_status("__PROBE__:1"), LaunchStatus::Failed);
        // pgrep missing on the board
        assert_eq!(probe_status("__PROBE__:127"), LaunchStatus::Unknown);
        // pgrep's own failure modes
        assert_eq!(probe_status("__PROBE__:2"), LaunchStatus::Unknown);
        assert_eq!(probe_status("no marker at all"), LaunchStatus::Unknown);
        assert_eq!(probe_status(""), LaunchStatus::Unknown);
    }

    #[test]
    fn test_probe_status_finds_marker_among_other_lines() {
        let stdout = "nohup: ignoring input\n__PROBE__:0\n";
        assert_eq!(probe_status(stdout), LaunchStatus::Started);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LaunchStatus::Started.to_string(), "started");
        assert_eq!(LaunchStatus::Failed.to_string(), "failed");
        assert_eq!(LaunchStatus::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_started_flag_follows_status() {
        let started = OperationResult::from_outputs(&[], LaunchStatus::Started);
        assert!(started.started);
        let unknown = OperationResult::from_outputs(&[], LaunchStatus::Unknown);
        assert!(!unknown.started);
    }
}
