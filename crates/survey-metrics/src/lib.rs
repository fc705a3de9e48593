mod metrics;

pub use metrics::SurveyMetrics;
