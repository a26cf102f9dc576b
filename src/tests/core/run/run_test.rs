#[cfg(test)]
mod tests {
    use crate::core::counter::{Counter, CounterError};
    use crate::core::run::{run_counter, RunError};

    fn run(start: i64, times: u64, json: bool) -> (Counter, Result<(), RunError>, String) {
        let mut counter = Counter::new(start);
        let mut out = Vec::new();
        let result = run_counter(&mut counter, times, json, &mut out);
        (counter, result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_plain_output_one_value_per_line() {
        let (counter, result, out) = run(0, 3, false);
        assert!(result.is_ok());
        assert_eq!(out, "1\n2\n3\n");
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn test_json_report_shape() {
        let (_, result, out) = run(-5, 2, true);
        assert!(result.is_ok());
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            report,
            serde_json::json!({
                "counter": { "start": -5, "value": -3 },
                "values": [-4, -3],
            })
        );
    }

    #[test]
    fn test_zero_times_reports_untouched_counter() {
        let (_, result, out) = run(9, 0, true);
        assert!(result.is_ok());
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["counter"]["value"], 9);
        assert_eq!(report["values"], serde_json::json!([]));
    }

    #[test]
    fn test_overflow_keeps_values_already_written() {
        let (counter, result, out) = run(i64::MAX - 1, 3, false);
        assert_eq!(out, format!("{}\n", i64::MAX));
        assert_eq!(counter.value(), i64::MAX);
        match result {
            Err(RunError::Counter(CounterError::Overflow { value })) => assert_eq!(value, i64::MAX),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow_error_displays_counter_message() {
        let (_, result, out) = run(i64::MAX, 1, true);
        assert!(out.is_empty());
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("counter overflow: cannot increment past {}", i64::MAX)
        );
    }
}
