//! Delimiter tokenizer for the catalog line format.
//!
//! The format is a two-level delimiter grammar: `;` separates properties
//! within a record line, `,` separates tokens within a property. Splitting is
//! total and preserves empty chunks so the codec layers can decide what an
//! empty chunk means at their level.

/// Separates properties inside a record line.
pub const PROP_DELIMITER: char = ';';

/// Separates tokens inside a property chunk.
pub const TOKEN_DELIMITER: char = ',';

/// Split `data` at every occurrence of `delimiter`.
///
/// Adjacent delimiters produce empty chunks rather than being merged; the
/// empty string splits to a single empty chunk. The delimiter itself is not
/// preserved.
pub fn split_chunks(data: &str, delimiter: char) -> Vec<String> {
    data.split(delimiter).map(str::to_string).collect()
}

/// Join `chunks` with `delimiter`, the inverse of [`split_chunks`].
pub fn join_chunks<S: AsRef<str>>(chunks: &[S], delimiter: char) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(chunk.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_chunks() {
        assert_eq!(split_chunks("a;b;;c", ';'), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn split_empty_input_yields_one_empty_chunk() {
        assert_eq!(split_chunks("", ';'), vec![""]);
    }

    #[test]
    fn split_trailing_delimiter_yields_trailing_empty_chunk() {
        assert_eq!(split_chunks("0,id,7;", ';'), vec!["0,id,7", ""]);
    }

    #[test]
    fn join_inverts_split() {
        let chunks = split_chunks("3,prop2,isArray,5,6,7", ',');
        assert_eq!(join_chunks(&chunks, ','), "3,prop2,isArray,5,6,7");
    }

    #[test]
    fn join_empty_slice_is_empty() {
        assert_eq!(join_chunks::<&str>(&[], ';'), "");
    }
}
