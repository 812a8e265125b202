//! Advisory completeness check over an assembled payload
//!
//! Never mutates and never fails; it only reports which required leaf
//! fields are empty, by dotted path.

use shared::{ReportPayload, ValidationReport};

/// Required leaf fields, in reporting order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "metadata.requesterType",
    "metadata.country",
    "problemDefinition.statedProblem",
    "regionalProfile.demographics",
    "confidenceScores.overall",
];

pub fn validate(payload: &ReportPayload) -> ValidationReport {
    let checks = [
        !payload.metadata.requester_type.trim().is_empty(),
        !payload.metadata.country.trim().is_empty(),
        !payload.problem_definition.stated_problem.trim().is_empty(),
        payload.regional_profile.demographics.is_some(),
        payload.confidence_scores.overall.is_some_and(f64::is_finite),
    ];

    let missing_fields: Vec<String> = REQUIRED_FIELDS
        .iter()
        .zip(checks)
        .filter(|(_, present)| !present)
        .map(|(path, _)| path.to_string())
        .collect();

    ValidationReport {
        is_complete: missing_fields.is_empty(),
        missing_fields,
    }
}
