use refinery_observability::{events, init_tracing_with_filter};

#[test]
fn second_init_reports_existing_subscriber() {
    // Either this test or another installed the global subscriber first;
    // the second call must not panic.
    let _ = init_tracing_with_filter("debug");
    assert!(!init_tracing_with_filter("debug"));
}

#[test]
fn events_emit_without_panicking() {
    events::refinement_completed(10, 2, 3, 5, 50.0);
    events::concepts_merged("API", 3, 9);
    events::concepts_filtered(3, 1, 0.4);
    events::config_rejected("threshold similar = 1.5 is outside [0, 1]");
}
