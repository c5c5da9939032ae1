//! Human-readable rendering of metric readings.
//!
//! Well-known metrics get a sentence ("55 active connections opened").
//! Anything else falls back to `NAME value unit`, with the API's long unit
//! name shortened where a short form is known.

/// Placeholder replaced with the reading in message templates.
const VALUE_PLACEHOLDER: &str = "{v}";

/// Render a reading of `metric_name` as a status message.
pub fn format_metric(metric_name: &str, value: f64, units: &str) -> String {
    match message_template(metric_name) {
        Some(template) => template.replacen(VALUE_PLACEHOLDER, &value.to_string(), 1),
        None => {
            let line = format!("{} {} {}", metric_name, value, unit_abbreviation(units));
            line.trim_end().to_string()
        }
    }
}

/// Message template for a known metric name.
pub fn message_template(metric_name: &str) -> Option<&'static str> {
    let template = match metric_name {
        "ASSERT_MSG" => "{v} message asserts since process started",
        "ASSERT_REGULAR" => "{v} regular asserts since process started",
        "ASSERT_USER" => "{v} user asserts since process started",
        "ASSERT_WARNING" => "{v} warnings raised since process started",
        "BACKGROUND_FLUSH_AVG" => "{v} millisecond background flush average",
        "COMPUTED_MEMORY" => "{v} megabytes non-mapped virtual memory",
        "CONNECTIONS" => "{v} active connections opened",
        "CURSORS_TOTAL_OPEN" => "{v} active cursors",
        "CURSORS_TOTAL_TIMED_OUT" => "{v} cursor timeouts since process started",
        "DB_STORAGE_TOTAL" => "{v} bytes of on-disk storage used",
        "EFFECTIVE_LOCK_PERCENTAGE" => "{v} effective lock percentage",
        "EXTRA_INFO_PAGE_FAULTS" => "{v} page faults per second",
        "GLOBAL_ACCESSES_NOT_IN_MEMORY" => "{v} not in memory page accesses per second",
        "GLOBAL_LOCK_CURRENT_QUEUE_READERS" => "{v} queued readers",
        "GLOBAL_LOCK_CURRENT_QUEUE_TOTAL" => "{v} queued total requests",
        "GLOBAL_LOCK_CURRENT_QUEUE_WRITERS" => "{v} queued writers",
        "GLOBAL_PAGE_FAULT_EXCEPTIONS_THROWN" => "{v} page fault exceptions per second",
        "INDEX_COUNTERS_BTREE_ACCESSES" => "{v} btree accesses per second",
        "INDEX_COUNTERS_BTREE_HITS" => "{v} btree hits per second",
        "INDEX_COUNTERS_BTREE_MISSES" => "{v} btree misses per second",
        "INDEX_COUNTERS_BTREE_MISS_RATIO" => "{v} btree miss ratio",
        "JOURNALING_COMMITS_IN_WRITE_LOCK" => "{v} journal commits in write lock",
        "JOURNALING_MB" => "{v} megabytes written to journal per second",
        "MEMORY_MAPPED" => "{v} megabytes of mapped datafiles",
        "MEMORY_RESIDENT" => "{v} megabytes of resident memory used",
        "MEMORY_VIRTUAL" => "{v} megabytes of virtual memory used",
        "NETWORK_BYTES_IN" => "{v} incoming bytes per second",
        "NETWORK_BYTES_OUT" => "{v} outgoing bytes per second",
        "NETWORK_NUM_REQUESTS" => "{v} requests per second",
        "OPCOUNTERS_CMD" => "{v} commands per second",
        "OPCOUNTERS_DELETE" => "{v} deletes per second",
        "OPCOUNTERS_GETMORE" => "{v} getmores per second",
        "OPCOUNTERS_INSERT" => "{v} inserts per second",
        "OPCOUNTERS_QUERY" => "{v} queries per second",
        "OPCOUNTERS_UPDATE" => "{v} updates per second",
        "OPCOUNTERS_REPL_CMD" => "{v} replicated commands per second",
        "OPCOUNTERS_REPL_DELETE" => "{v} replicated deletes per second",
        "OPCOUNTERS_REPL_INSERT" => "{v} replicated inserts per second",
        "OPCOUNTERS_REPL_UPDATE" => "{v} replicated updates per second",
        "OPLOG_SLAVE_LAG_MASTER_TIME" => "{v} seconds of replication lag",
        "OPLOG_MASTER_LAG_TIME_DIFF" => "{v} seconds of replication headroom",
        _ => return None,
    };
    Some(template)
}

/// Short display form of a long unit name. Unknown units render empty.
pub fn unit_abbreviation(units: &str) -> &'static str {
    match units {
        "BITS" => "b",
        "BYTES" => "B",
        "KILOBITS" => "kb",
        "KILOBYTES" => "KB",
        "MEGABITS" => "mb",
        "MEGABYTES" => "MB",
        "GIGABITS" => "gb",
        "GIGABYTES" => "GB",
        "TERABYTES" => "TB",
        "PETABYTES" => "PB",
        "MILLISECONDS" => "ms",
        "SECONDS" => "secs",
        "MINUTES" => "mins",
        "HOURS" => "hours",
        "DAYS" => "days",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_metric_uses_template() {
        assert_eq!(format_metric("CONNECTIONS", 55.0, "RAW"), "55 active connections opened");
        assert_eq!(
            format_metric("OPLOG_SLAVE_LAG_MASTER_TIME", 2.5, "SECONDS"),
            "2.5 seconds of replication lag"
        );
    }

    #[test]
    fn test_unknown_metric_falls_back() {
        assert_eq!(format_metric("CACHE_BYTES_READ_INTO", 42.0, "KILOBYTES"), "CACHE_BYTES_READ_INTO 42 KB");
        assert_eq!(format_metric("TICKETS_AVAILABLE_READS", 128.0, "RAW"), "TICKETS_AVAILABLE_READS 128");
    }

    #[test]
    fn test_unknown_unit_renders_empty() {
        assert_eq!(unit_abbreviation("FURLONGS"), "");
        assert_eq!(format_metric("SOMETHING_NEW", 7.0, "FURLONGS"), "SOMETHING_NEW 7");
        assert_eq!(format_metric("SOMETHING_NEW", 7.0, ""), "SOMETHING_NEW 7");
    }

    #[test]
    fn test_every_template_has_one_placeholder() {
        for name in ["ASSERT_MSG", "CONNECTIONS", "MEMORY_VIRTUAL", "OPLOG_MASTER_LAG_TIME_DIFF"] {
            let template = message_template(name).unwrap();
            assert_eq!(template.matches(VALUE_PLACEHOLDER).count(), 1, "{}", name);
        }
    }
}
