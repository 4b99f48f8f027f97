// file: src/nlp/czech.rs
// description: light stemmer for Czech, also used for Slovak
// reference: Dolamic & Savoy, "Indexing and stemming approaches for the Czech language" (light variant)

/// Removes case endings and possessive suffixes. Expects a lower-cased word;
/// words containing non-alphabetic characters are returned unchanged.
pub fn stem(word: &str) -> String {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return word.to_string();
    }

    let chars: Vec<char> = word.chars().collect();
    let chars = remove_case(chars);
    let chars = remove_possessives(chars);
    chars.into_iter().collect()
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    word.len() >= suffix.len() && word[word.len() - suffix.len()..] == suffix[..]
}

fn ends_with_any(word: &[char], suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| ends_with(word, s))
}

fn truncate(mut word: Vec<char>, count: usize) -> Vec<char> {
    let len = word.len().saturating_sub(count);
    word.truncate(len);
    word
}

fn remove_case(word: Vec<char>) -> Vec<char> {
    let len = word.len();

    if len > 7 && ends_with(&word, "atech") {
        return truncate(word, 5);
    }

    if len > 6 {
        if ends_with(&word, "ětem") {
            return palatalise(truncate(word, 3));
        }
        if ends_with(&word, "atům") {
            return truncate(word, 4);
        }
    }

    if len > 5 {
        if ends_with_any(
            &word,
            &[
                "ech", "ich", "ích", "ého", "ěmi", "emi", "ému", "ete", "eti", "iho", "ího",
                "ími", "imu",
            ],
        ) {
            return palatalise(truncate(word, 2));
        }
        if ends_with_any(
            &word,
            &["ách", "ata", "aty", "ých", "ama", "ami", "ové", "ovi", "ými"],
        ) {
            return truncate(word, 3);
        }
    }

    if len > 4 {
        if ends_with(&word, "em") {
            return palatalise(truncate(word, 1));
        }
        if ends_with_any(&word, &["es", "ém", "ím"]) {
            return palatalise(truncate(word, 2));
        }
        if ends_with_any(&word, &["ům", "at", "ám", "os", "us", "ým", "mi", "ou"]) {
            return truncate(word, 2);
        }
    }

    if len > 3 {
        if ends_with_any(&word, &["e", "i", "í", "ě"]) {
            return palatalise(word);
        }
        if ends_with_any(&word, &["u", "y", "ů", "a", "o", "á", "é", "ý"]) {
            return truncate(word, 1);
        }
    }

    word
}

fn remove_possessives(word: Vec<char>) -> Vec<char> {
    if word.len() > 5 {
        if ends_with_any(&word, &["ov", "ův"]) {
            return truncate(word, 2);
        }
        if ends_with(&word, "in") {
            return palatalise(truncate(word, 1));
        }
    }

    word
}

fn palatalise(word: Vec<char>) -> Vec<char> {
    if ends_with_any(&word, &["ci", "ce", "či", "če"]) {
        let mut word = truncate(word, 2);
        word.push('k');
        return word;
    }
    if ends_with_any(&word, &["zi", "ze", "ži", "že"]) {
        let mut word = truncate(word, 2);
        word.push('h');
        return word;
    }
    if ends_with_any(&word, &["čtě", "čti", "čtí"]) {
        let mut word = truncate(word, 3);
        word.extend(['c', 'k']);
        return word;
    }
    if ends_with_any(&word, &["ště", "šti", "ští"]) {
        let mut word = truncate(word, 3);
        word.extend(['s', 'k']);
        return word;
    }

    truncate(word, 1)
}
