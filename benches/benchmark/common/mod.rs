use criterion::Criterion;
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub age: u8,
    pub interests: Vec<String>,
}

impl SignUpForm {
    pub fn new(id: u64) -> Self {
        // Every third form carries violations on each field.
        let broken = id % 3 == 0;
        Self {
            username: if broken { "x".into() } else { format!("user_{id}") },
            email: if broken {
                format!("user {id} at company")
            } else {
                format!("user{id}@company.com")
            },
            age: if broken { 9 } else { 18 + (id % 60) as u8 },
            interests: if broken {
                Vec::new()
            } else {
                vec!["rust".into(), "web".into()]
            },
        }
    }
}

pub fn realistic_forms() -> &'static Vec<SignUpForm> {
    static INSTANCE: OnceLock<Vec<SignUpForm>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(SignUpForm::new).collect())
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
