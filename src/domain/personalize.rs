//! Presentation-layer rewrite of catalog statements: first person becomes
//! second person with gender agreement, then the statement is framed as a
//! question addressed to the respondent by name. Pure string rewriting over
//! static lookup tables; scoring never sees the rewritten text.

/// Female second-person forms, applied in listed order. Compound phrases
/// sit in the table as whole keys so their feminine agreement comes out
/// right ("لست مهتماً" needs both the negation and the adjective changed).
const FEMALE_FORMS: &[(&str, &str)] = &[
    // Verbs
    ("أستمتع", "تستمتعين"),
    ("أحب", "تحبين"),
    ("أهتم", "تهتمين"),
    ("أتبع", "تتبعين"),
    ("أؤجل", "تؤجلين"),
    ("أنسى", "تنسين"),
    ("أجد", "تجدين"),
    ("أشعر", "تشعرين"),
    ("أفضل", "تفضلين"),
    ("أبدأ", "تبدئين"),
    ("أتعاطف", "تتعاطفين"),
    ("أجعل", "تجعلين"),
    ("أهين", "تهينين"),
    ("أثق", "تثقين"),
    ("أقلق", "تقلقين"),
    ("أتعامل", "تتعاملين"),
    ("أميل", "تميلين"),
    ("أترك", "تتركين"),
    ("أتحدث", "تتحدثين"),
    ("أمانع", "تمانعين"),
    // Adjectives
    ("فضولي", "فضولية"),
    ("مستعد", "مستعدة"),
    ("منظم", "منظمة"),
    ("دقيق", "دقيقة"),
    ("مجتهد", "مجتهدة"),
    ("مثابر", "مثابرة"),
    ("مبدع", "مبدعة"),
    ("هادئ", "هادئة"),
    ("صبور", "صبورة"),
    ("متعاون", "متعاونة"),
    ("مسترخ", "مسترخية"),
    ("متقلب", "متقلبة"),
    ("مستقر", "مستقرة"),
    ("راض", "راضية"),
    ("مفعم", "مفعمة"),
    ("سريع", "سريعة"),
    // Possessives and other forms
    ("لدي", "لديكِ"),
    ("في عملي", "في عملكِ"),
    ("بمفردي", "بمفردكِ"),
    ("بطبعي", "بطبعكِ"),
    ("عن نفسي", "عن نفسكِ"),
    ("أشيائي", "أشياءكِ"),
    ("لست مهتماً", "لستِ مهتمة"),
    ("لا أتحدث", "لا تتحدثين"),
    ("لا أمانع", "لا تمانعين"),
    ("يمكن أن أكون", "يمكن أن تكوني"),
];

/// Male second-person forms. No adjective rows: masculine adjectives keep
/// their first-person surface form.
const MALE_FORMS: &[(&str, &str)] = &[
    // Verbs
    ("أستمتع", "تستمتع"),
    ("أحب", "تحب"),
    ("أهتم", "تهتم"),
    ("أتبع", "تتبع"),
    ("أؤجل", "تؤجل"),
    ("أنسى", "تنسى"),
    ("أجد", "تجد"),
    ("أشعر", "تشعر"),
    ("أفضل", "تفضل"),
    ("أبدأ", "تبدأ"),
    ("أتعاطف", "تتعاطف"),
    ("أجعل", "تجعل"),
    ("أهين", "تهين"),
    ("أثق", "تثق"),
    ("أقلق", "تقلق"),
    ("أتعامل", "تتعامل"),
    ("أميل", "تميل"),
    ("أترك", "تترك"),
    ("أتحدث", "تتحدث"),
    ("أمانع", "تمانع"),
    // Possessives
    ("لدي", "لديك"),
    ("في عملي", "في عملك"),
    ("بمفردي", "بمفردك"),
    ("بطبعي", "بطبعك"),
    ("عن نفسي", "عن نفسك"),
    ("أشيائي", "أشياءك"),
    ("لا أتحدث", "لا تتحدث"),
    ("لا أمانع", "لا تمانع"),
    ("يمكن أن أكون", "يمكن أن تكون"),
];

const FEMALE_NAME_ENDINGS: &[&str] = &["ة", "اء", "ى", "ان", "ين"];

fn is_female_name(name: &str, gender: Option<&str>) -> bool {
    match gender {
        Some("female") => true,
        Some("male") => false,
        // Heuristic on common feminine name endings when no gender was given.
        _ => FEMALE_NAME_ENDINGS.iter().any(|ending| name.ends_with(ending)),
    }
}

fn apply_forms(text: &str, forms: &[(&str, &str)]) -> String {
    forms
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Rewrites a first-person statement into a question addressed to `name`.
/// An empty name leaves the statement untouched.
pub fn personalize(text: &str, name: &str, gender: Option<&str>) -> String {
    if name.is_empty() {
        return text.to_string();
    }

    let feminine = is_female_name(name, gender);
    let mut rewritten = text.replace("أنا ", if feminine { "أنتِ " } else { "أنت " });
    rewritten = apply_forms(
        &rewritten,
        if feminine { FEMALE_FORMS } else { MALE_FORMS },
    );

    if let Some(stripped) = rewritten.strip_suffix('.') {
        rewritten = stripped.to_string();
    }

    format!("هل {} يا {}؟", rewritten, name)
}

/// First token of the respondent's full name, used as the vocative.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("")
}
