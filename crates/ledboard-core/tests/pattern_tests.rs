#[cfg(test)]
mod tests {
    use ledboard_core::pattern::ProcessPattern;
    use regex::Regex;

    fn compiled(path: &str) -> Regex {
        Regex::new(ProcessPattern::for_executable(path).as_str()).unwrap()
    }

    #[test]
    fn test_brackets_first_character() {
        let pattern = ProcessPattern::for_executable("/home/pi/renderer.py");
        assert_eq!(pattern.as_str(), "[r]enderer\\.py");
    }

    #[test]
    fn test_matches_running_renderer_command_line() {
        let re = compiled("/home/pi/renderer.py");
        assert!(re.is_match(
            "python3 /home/pi/renderer.py --runner --payload-b64 eyJtb2RlIjoibWVzc2FnZSJ9"
        ));
    }

    #[test]
    fn test_does_not_match_command_carrying_the_pattern() {
        let pattern = ProcessPattern::for_executable("/home/pi/renderer.py");
        let re = Regex::new(pattern.as_str()).unwrap();

        // The pkill/pgrep command line contains the pattern text itself;
        // it must never be a match.
        let probe = format!("pgrep -f '{}'", pattern.as_str());
        assert!(!re.is_match(&probe));
        let kill = format!("pkill -f '{}' >/dev/null 2>&1 || true", pattern.as_str());
        assert!(!re.is_match(&kill));
    }

    #[test]
    fn test_escaped_dot_does_not_match_arbitrary_characters() {
        let re = compiled("/home/pi/renderer.py");
        assert!(!re.is_match("python3 /home/pi/rendererxpy --runner"));
    }

    #[test]
    fn test_falls_back_when_path_has_no_name() {
        assert_eq!(
            ProcessPattern::for_executable("").as_str(),
            "[r]enderer\\.py"
        );
        assert_eq!(
            ProcessPattern::for_executable("///").as_str(),
            "[r]enderer\\.py"
        );
    }

    #[test]
    fn test_uses_last_path_component() {
        let pattern = ProcessPattern::for_executable("/opt/display/show.py/");
        assert_eq!(pattern.as_str(), "[s]how\\.py");
    }

    #[test]
    fn test_leading_escape_skips_bracketing() {
        // Escaping turns the leading dot into "\."; bracketing the
        // backslash would corrupt the expression.
        let pattern = ProcessPattern::for_executable("/opt/.hidden");
        assert_eq!(pattern.as_str(), "\\.hidden");
    }

    #[test]
    fn test_metacharacters_in_name_are_escaped() {
        let pattern = ProcessPattern::for_executable("/srv/led(board)+.py");
        let re = Regex::new(pattern.as_str()).unwrap();
        assert!(re.is_match("python3 /srv/led(board)+.py --runner"));
        assert!(!re.is_match("python3 /srv/ledboard.py --runner"));
    }
}
