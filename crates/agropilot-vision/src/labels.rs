// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed disease label table and label-keyed advice strings.

/// Output classes of the leaf classifier, in model output order.
pub const DISEASE_CLASSES: &[&str] = &[
    "healthy",
    "bacterial_blight",
    "powdery_mildew",
    "soybean_rust",
    "charcoal_rot",
    "frogeye_leaf_spot",
];

/// Treatment advice for a detected label.
pub fn treatment_advice(label: &str) -> &'static str {
    match label {
        "healthy" => "Your soybeans look healthy! Continue good farming practices.",
        "bacterial_blight" => {
            "Apply copper-based bactericides. Remove infected plants. Avoid overhead irrigation."
        }
        "powdery_mildew" => {
            "Use sulfur-based fungicides. Improve air circulation. Remove infected leaves."
        }
        "soybean_rust" => {
            "Apply fungicides containing triazoles. Plant resistant varieties. Practice crop rotation."
        }
        "charcoal_rot" => "Improve soil drainage. Use resistant varieties. Avoid water stress.",
        "frogeye_leaf_spot" => {
            "Apply fungicides with active ingredients like azoxystrobin. Remove crop debris."
        }
        "unknown" => "Consult local agricultural expert for accurate diagnosis.",
        _ => "Consult agricultural expert for proper diagnosis and treatment.",
    }
}

/// Prevention advice for a detected label.
pub fn prevention_advice(label: &str) -> &'static str {
    match label {
        "healthy" => "Maintain soil health with organic matter and proper pH levels.",
        "bacterial_blight" => {
            "Use disease-free seeds. Practice crop rotation. Avoid working in wet fields."
        }
        "powdery_mildew" => {
            "Ensure proper plant spacing. Monitor humidity levels. Use resistant varieties."
        }
        "soybean_rust" => {
            "Plant early-maturing varieties. Monitor weather conditions. Use certified seeds."
        }
        "charcoal_rot" => {
            "Improve soil organic matter. Avoid drought stress. Practice rotation with non-host crops."
        }
        "frogeye_leaf_spot" => {
            "Use certified disease-free seeds. Practice crop rotation. Manage crop residue."
        }
        "unknown" => "Regular field monitoring and maintaining plant health can prevent many diseases.",
        _ => "Regular monitoring, good agricultural practices, and expert consultation are essential.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_table_has_six_classes() {
        assert_eq!(DISEASE_CLASSES.len(), 6);
        assert_eq!(DISEASE_CLASSES[0], "healthy");
        assert_eq!(DISEASE_CLASSES[4], "charcoal_rot");
    }

    #[test]
    fn every_class_has_specific_advice() {
        let generic_treatment = treatment_advice("something_unmapped");
        let generic_prevention = prevention_advice("something_unmapped");
        for label in DISEASE_CLASSES {
            assert_ne!(treatment_advice(label), generic_treatment);
            assert_ne!(prevention_advice(label), generic_prevention);
        }
    }

    #[test]
    fn unmapped_labels_get_generic_advice() {
        assert!(treatment_advice("mystery_blotch").contains("Consult agricultural expert"));
        assert!(prevention_advice("mystery_blotch").contains("Regular monitoring"));
    }
}
