pub struct Step {
    pub operation: String,
    pub result: i64,
}

/// Collects one `Step` per reduced binary operation when `detailed_mode`
/// is on; otherwise `add_step` is a no-op.
pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    pub fn add_step(&mut self, operation: String, result: i64) {
        if self.detailed_mode {
            self.steps.push(Step { operation, result });
        }
    }
}
