use cyanea_core::{CyaneaError, Summarizable};
use cyanea_featurize::{ClassicEncoder, EncoderConfig, EncodingScheme, DEFAULT_LENGTH};

// Signal peptide of human serum albumin.
const ALB_SIGNAL: &str = "MKWVTFISLLFLFSSAYS";

#[test]
fn all_schemes_have_documented_lengths() {
    let enc = ClassicEncoder::new().unwrap();
    let n = ALB_SIGNAL.len();
    let lengths: Vec<usize> = EncodingScheme::ALL
        .iter()
        .map(|&s| enc.encode(s, ALB_SIGNAL).unwrap().len())
        .collect();
    assert_eq!(
        lengths,
        vec![DEFAULT_LENGTH, DEFAULT_LENGTH, 20 * n, 20, DEFAULT_LENGTH, 20]
    );
}

#[test]
fn bag_of_words_of_signal_peptide() {
    let enc = ClassicEncoder::new().unwrap();
    let bow = enc.bag_of_words(ALB_SIGNAL).unwrap();
    let vocab = enc.bow_vocabulary();
    let count = |r: u8| bow[vocab.get(&[r]).unwrap()];
    assert_eq!(count(b'S'), 4.0);
    assert_eq!(count(b'L'), 3.0);
    assert_eq!(count(b'F'), 3.0);
    assert_eq!(count(b'C'), 0.0);
}

#[test]
fn vocabularies_follow_alphabet_order() {
    let enc = ClassicEncoder::new().unwrap();
    let symbols = enc.alphabet().symbols();
    for vocab in [
        enc.bow_vocabulary(),
        enc.tfidf_vocabulary(),
        enc.ngram_vocabulary(),
    ] {
        let terms: Vec<u8> = vocab.terms().map(|t| t[0]).collect();
        assert_eq!(terms, symbols);
    }
}

#[test]
fn unknown_residue_reports_position() {
    let enc = ClassicEncoder::new().unwrap();
    let err = enc.tfidf("MKWV*").unwrap_err();
    assert_eq!(
        err,
        CyaneaError::UnknownResidue {
            residue: '*',
            position: 4
        }
    );
    assert_eq!(err.to_string(), "unknown residue '*' at position 4");
}

#[test]
fn shared_across_threads() {
    let enc = std::sync::Arc::new(ClassicEncoder::new().unwrap());
    let expected = enc.one_hot(ALB_SIGNAL).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let enc = std::sync::Arc::clone(&enc);
            std::thread::spawn(move || enc.one_hot(ALB_SIGNAL).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn summary_mentions_vocabularies() {
    let enc = ClassicEncoder::with_config(EncoderConfig::default()).unwrap();
    assert!(enc.summary().contains("ngram=20 terms"));
}

#[cfg(feature = "serde")]
#[test]
fn config_from_partial_json() {
    let config: EncoderConfig = serde_json::from_str(r#"{"label_length": null}"#).unwrap();
    assert_eq!(config.one_hot_length, Some(DEFAULT_LENGTH));
    assert_eq!(config.label_length, None);
    let scheme: EncodingScheme = serde_json::from_str(r#""bag_of_words""#).unwrap();
    assert_eq!(scheme, EncodingScheme::BagOfWords);
}
