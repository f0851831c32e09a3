//! Shared canned dependency parses for rule and checker tests.
//!
//! Each fixture mirrors what the annotation service returns for one of the
//! sentences used throughout the test suite, so rules can be exercised
//! without the service running.

use super::{Annotation, NounChunk, Token};

/// Build a word token.
pub fn token(text: &str, tag: &str, pos: &str, dep: &str, head: usize) -> Token {
    Token {
        text: text.to_string(),
        tag: tag.to_string(),
        pos: pos.to_string(),
        dep: dep.to_string(),
        head,
        is_punct: false,
        is_space: false,
    }
}

/// Build a punctuation token.
pub fn punct(text: &str, head: usize) -> Token {
    Token {
        text: text.to_string(),
        tag: ".".to_string(),
        pos: "PUNCT".to_string(),
        dep: "punct".to_string(),
        head,
        is_punct: true,
        is_space: false,
    }
}

/// Build a noun chunk span.
pub const fn chunk(start: usize, end: usize, root: usize) -> NounChunk {
    NounChunk { start, end, root }
}

/// Build a validated annotation, panicking on malformed fixture data.
pub fn annotation(text: &str, tokens: Vec<Token>, chunks: Vec<NounChunk>) -> Annotation {
    Annotation::new(text.to_string(), tokens, chunks).unwrap()
}

/// "Turn the shaft assembly." (imperative, determiner present)
pub fn turn_the_shaft_assembly() -> Annotation {
    annotation(
        "Turn the shaft assembly.",
        vec![
            token("Turn", "VB", "VERB", "ROOT", 0),
            token("the", "DT", "DET", "det", 3),
            token("shaft", "NN", "NOUN", "compound", 3),
            token("assembly", "NN", "NOUN", "dobj", 0),
            punct(".", 0),
        ],
        vec![chunk(1, 4, 3)],
    )
}

/// "Turn shaft assembly." (imperative, bare noun phrase)
pub fn turn_shaft_assembly() -> Annotation {
    annotation(
        "Turn shaft assembly.",
        vec![
            token("Turn", "VB", "VERB", "ROOT", 0),
            token("shaft", "NN", "NOUN", "compound", 2),
            token("assembly", "NN", "NOUN", "dobj", 0),
            punct(".", 0),
        ],
        vec![chunk(1, 3, 2)],
    )
}

/// "The safety procedures are supplied by the manufacturer." (passive)
pub fn passive_supplied_by_manufacturer() -> Annotation {
    annotation(
        "The safety procedures are supplied by the manufacturer.",
        vec![
            token("The", "DT", "DET", "det", 2),
            token("safety", "NN", "NOUN", "compound", 2),
            token("procedures", "NNS", "NOUN", "nsubjpass", 4),
            token("are", "VBP", "AUX", "auxpass", 4),
            token("supplied", "VBN", "VERB", "ROOT", 4),
            token("by", "IN", "ADP", "agent", 4),
            token("the", "DT", "DET", "det", 7),
            token("manufacturer", "NN", "NOUN", "pobj", 5),
            punct(".", 4),
        ],
        vec![chunk(0, 3, 2), chunk(6, 8, 7)],
    )
}

/// "Disengage the lock and lift the handle carefully." (conjoined actions)
pub fn disengage_and_lift() -> Annotation {
    annotation(
        "Disengage the lock and lift the handle carefully.",
        vec![
            token("Disengage", "VB", "VERB", "ROOT", 0),
            token("the", "DT", "DET", "det", 2),
            token("lock", "NN", "NOUN", "dobj", 0),
            token("and", "CC", "CCONJ", "cc", 0),
            token("lift", "VB", "VERB", "conj", 0),
            token("the", "DT", "DET", "det", 6),
            token("handle", "NN", "NOUN", "dobj", 4),
            token("carefully", "RB", "ADV", "advmod", 4),
            punct(".", 0),
        ],
        vec![chunk(1, 3, 2), chunk(5, 7, 6)],
    )
}

/// "Set the switch and release the button." (conjoined actions)
pub fn set_and_release() -> Annotation {
    annotation(
        "Set the switch and release the button.",
        vec![
            token("Set", "VB", "VERB", "ROOT", 0),
            token("the", "DT", "DET", "det", 2),
            token("switch", "NN", "NOUN", "dobj", 0),
            token("and", "CC", "CCONJ", "cc", 0),
            token("release", "VB", "VERB", "conj", 0),
            token("the", "DT", "DET", "det", 6),
            token("button", "NN", "NOUN", "dobj", 4),
            punct(".", 0),
        ],
        vec![chunk(1, 3, 2), chunk(5, 7, 6)],
    )
}

/// "The operator turns the handle." (declarative, finite verb)
pub fn operator_turns_handle() -> Annotation {
    annotation(
        "The operator turns the handle.",
        vec![
            token("The", "DT", "DET", "det", 1),
            token("operator", "NN", "NOUN", "nsubj", 2),
            token("turns", "VBZ", "VERB", "ROOT", 2),
            token("the", "DT", "DET", "det", 4),
            token("handle", "NN", "NOUN", "dobj", 2),
            punct(".", 2),
        ],
        vec![chunk(0, 2, 1), chunk(3, 5, 4)],
    )
}

/// "You must press the button." (base-form verb with explicit subject)
pub fn you_must_press() -> Annotation {
    annotation(
        "You must press the button.",
        vec![
            token("You", "PRP", "PRON", "nsubj", 2),
            token("must", "MD", "AUX", "aux", 2),
            token("press", "VB", "VERB", "ROOT", 2),
            token("the", "DT", "DET", "det", 4),
            token("button", "NN", "NOUN", "dobj", 2),
            punct(".", 2),
        ],
        vec![chunk(0, 1, 0), chunk(3, 5, 4)],
    )
}

/// "The main control panel." (nominal fragment, no verb)
pub fn nominal_fragment() -> Annotation {
    annotation(
        "The main control panel.",
        vec![
            token("The", "DT", "DET", "det", 3),
            token("main", "JJ", "ADJ", "amod", 3),
            token("control", "NN", "NOUN", "compound", 3),
            token("panel", "NN", "NOUN", "ROOT", 3),
            punct(".", 3),
        ],
        vec![chunk(0, 4, 3)],
    )
}

/// A sentence of exactly `words` word tokens plus a trailing period.
///
/// Token 0 is an imperative root verb so the fixture stays clean under the
/// other rules; the rest are bare filler nouns without noun chunks.
pub fn sentence_with_words(words: usize) -> Annotation {
    assert!(words >= 1, "need at least the root verb");
    let mut tokens = vec![token("Check", "VB", "VERB", "ROOT", 0)];
    for _ in 1..words {
        tokens.push(token("everything", "NN", "NOUN", "dobj", 0));
    }
    tokens.push(punct(".", 0));
    let text = tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    annotation(&text, tokens, vec![])
}
