use crate::types::report::GradeProfile;
use crate::types::scoring::{FiredRule, Grade};
use crate::types::selection::InputSelection;

pub const PURPOSE: &str = "This report predicts perceived color shifts caused by material \
differences and lighting conditions before construction, so that complaint risks after \
installation can be checked in advance.";

pub const NO_COMPOUND_RISK: &str =
    "No notable compound risk was detected. Following the standard process is recommended.";

pub fn grade_profile(grade: Grade) -> GradeProfile {
    match grade {
        Grade::A => GradeProfile {
            grade,
            status: "Very safe",
            description: "Color risk is very low and complaints after construction are unlikely.",
        },
        Grade::B => GradeProfile {
            grade,
            status: "Caution",
            description: "Color differences between materials may be noticeable under specific \
conditions. Explaining this to the client beforehand is recommended.",
        },
        Grade::C => GradeProfile {
            grade,
            status: "At risk",
            description: "Review the color combination and lighting plan before construction; \
the risk of a mismatch is high.",
        },
    }
}

pub fn fired_rule_explanation(rule: &FiredRule) -> String {
    format!(
        "Combined conditions and environment variables may cause visual mismatch; +{} risk points were added.",
        rule.points
    )
}

pub fn recommendations(inputs: &InputSelection) -> Vec<String> {
    let lighting = if inputs.get("CCT") == Some("Warm") {
        "Raise the color temperature to about 3500K to suppress the yellow cast."
    } else {
        "Tune illuminance with the light's saturation and the materials' reflectance in mind."
    };
    let surface = if inputs.get("Surface") == Some("Gloss") {
        "Use indirect lighting to spread highlights on glossy materials."
    } else {
        "Use a light source with CRI 90 or higher to keep the depth of matte materials."
    };
    vec![lighting.to_string(), surface.to_string()]
}

pub fn client_message(targets: &str, grade: Grade) -> String {
    if grade == Grade::A {
        format!("The selected combination of {targets} is visually harmonious and stable.")
    } else {
        format!(
            "The selected combination of {targets} may show color differences depending on the \
lighting. Please check the colors under artificial lighting at night in advance."
        )
    }
}
