use prometheus::{Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub transitions_total: IntCounterVec,
    pub transition_latency_seconds: HistogramVec,
    pub active_activities: IntGauge,
    pub notifications_in_queue: IntGauge,
    pub notifications_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let transitions_total = IntCounterVec::new(
            Opts::new(
                "transitions_total",
                "Lifecycle transitions by kind and outcome",
            ),
            &["kind", "outcome"],
        )
        .expect("valid transitions_total metric");

        let transition_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "transition_latency_seconds",
                "Latency of dispatcher invocations in seconds",
            ),
            &["outcome"],
        )
        .expect("valid transition_latency_seconds metric");

        let active_activities = IntGauge::new(
            "active_activities",
            "Activities currently in a non-terminal status",
        )
        .expect("valid active_activities metric");

        let notifications_in_queue = IntGauge::new(
            "notifications_in_queue",
            "Counterpart notifications waiting for the relay",
        )
        .expect("valid notifications_in_queue metric");

        let notifications_total = IntCounterVec::new(
            Opts::new(
                "notifications_total",
                "Notifications relayed by recipient role",
            ),
            &["recipient"],
        )
        .expect("valid notifications_total metric");

        registry
            .register(Box::new(transitions_total.clone()))
            .expect("register transitions_total");
        registry
            .register(Box::new(transition_latency_seconds.clone()))
            .expect("register transition_latency_seconds");
        registry
            .register(Box::new(active_activities.clone()))
            .expect("register active_activities");
        registry
            .register(Box::new(notifications_in_queue.clone()))
            .expect("register notifications_in_queue");
        registry
            .register(Box::new(notifications_total.clone()))
            .expect("register notifications_total");

        Self {
            registry,
            transitions_total,
            transition_latency_seconds,
            active_activities,
            notifications_in_queue,
            notifications_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
