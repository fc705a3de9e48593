use prometheus::{Encoder, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};
use survey_core::{Theme, ViewProgress};
use survey_report::SurveyReport;

pub struct SurveyMetrics {
    registry: Registry,
    pub feedback_submissions_total: IntCounterVec,
    pub feedback_rejected_total: IntCounterVec,
    pub theme_preference_count: IntGaugeVec,
    pub feedback_records: IntGauge,
    pub feedback_departments: IntGauge,
    pub feedback_today: IntGauge,
}

impl SurveyMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let feedback_submissions_total = IntCounterVec::new(
            Opts::new(
                "feedback_submissions_total",
                "Feedback records accepted, by preferred theme and whether all themes were viewed",
            ),
            &["theme", "fully_reviewed"],
        )?;
        let feedback_rejected_total = IntCounterVec::new(
            Opts::new("feedback_rejected_total", "Feedback inserts refused"),
            &["reason"],
        )?;
        let theme_preference_count = IntGaugeVec::new(
            Opts::new(
                "theme_preference_count",
                "Stored records preferring each theme",
            ),
            &["theme"],
        )?;
        let feedback_records = IntGauge::new("feedback_records", "Stored feedback records")?;
        let feedback_departments =
            IntGauge::new("feedback_departments", "Distinct departments with feedback")?;
        let feedback_today = IntGauge::new(
            "feedback_today",
            "Records created on the current local date",
        )?;

        registry.register(Box::new(feedback_submissions_total.clone()))?;
        registry.register(Box::new(feedback_rejected_total.clone()))?;
        registry.register(Box::new(theme_preference_count.clone()))?;
        registry.register(Box::new(feedback_records.clone()))?;
        registry.register(Box::new(feedback_departments.clone()))?;
        registry.register(Box::new(feedback_today.clone()))?;

        Ok(Self {
            registry,
            feedback_submissions_total,
            feedback_rejected_total,
            theme_preference_count,
            feedback_records,
            feedback_departments,
            feedback_today,
        })
    }

    pub fn observe_submission(&self, theme: Theme, viewed: ViewProgress) {
        let fully_reviewed = if viewed.all_viewed() { "true" } else { "false" };
        self.feedback_submissions_total
            .with_label_values(&[theme.as_str(), fully_reviewed])
            .inc();
    }

    pub fn observe_rejection(&self, reason: &str) {
        self.feedback_rejected_total
            .with_label_values(&[reason])
            .inc();
    }

    /// Overwrites the gauges with a freshly built report.
    pub fn observe_report(&self, report: &SurveyReport) {
        for (theme, count) in report.distribution.buckets() {
            self.theme_preference_count
                .with_label_values(&[theme.as_str()])
                .set(count as i64);
        }
        self.feedback_records.set(report.total as i64);
        self.feedback_departments.set(report.departments.len() as i64);
        self.feedback_today.set(report.today as i64);
    }

    /// Prometheus text exposition of every registered metric.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
