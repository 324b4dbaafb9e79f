//! Conversion entry points.

#[cfg(feature = "html")]
use std::io::{Read, Write};

use crate::convert::{self, Context};
use crate::node::Node;
use crate::options::Options;
use crate::rules::Rules;
#[cfg(feature = "html")]
use crate::ConvertError;
use crate::Result;

/// Read HTML from `reader` and write its Markdown rendering to `writer`.
///
/// Invalid UTF-8 is replaced rather than rejected, as browsers do.
#[cfg(feature = "html")]
pub fn convert<W: Write, R: Read>(mut writer: W, mut reader: R, options: &Options) -> Result<()> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(ConvertError::Parse)?;

    let html = String::from_utf8_lossy(&input);
    let markdown = convert_html(&html, options)?;

    writer
        .write_all(markdown.as_bytes())
        .map_err(ConvertError::Write)?;
    writer.flush().map_err(ConvertError::Write)
}

/// Convert an HTML string to Markdown
#[cfg(feature = "html")]
pub fn convert_html(html: &str, options: &Options) -> Result<String> {
    let root = crate::html::parse_html(html, options.max_depth)?;
    convert_node(&root, options)
}

/// Convert a DOM tree to Markdown.
///
/// An element root is rendered as itself (so `<p>` gets paragraph
/// treatment); any other root contributes its children. The result always
/// ends with one extra newline.
pub fn convert_node(node: &Node, options: &Options) -> Result<String> {
    let rules = Rules::from_rules(&options.rules);
    let cx = Context::new(options, &rules);

    log::debug!(
        "converting <{}> with {} extension rule(s)",
        node.tag_name(),
        rules.len()
    );

    let mut out = String::new();
    convert::convert(node, &mut out, &cx)?;
    out.push('\n');

    log::debug!("produced {} bytes of markdown", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    fn make_p(text: &str) -> Node {
        let mut p = Node::element("p");
        p.add_child(Node::text(text));
        p
    }

    #[test]
    fn test_simple_paragraph() {
        let result = convert_node(&make_p("Hello World"), &Options::default()).unwrap();
        assert_eq!(result, "Hello World\n\n\n");
    }

    #[test]
    fn test_document_root() {
        let mut doc = Node::document();
        doc.add_child(Node::text("plain"));
        assert_eq!(convert_node(&doc, &Options::default()).unwrap(), "plain\n");
    }

    #[test]
    fn test_comment_root() {
        let comment = Node::comment("c");
        assert_eq!(
            convert_node(&comment, &Options::default()).unwrap(),
            "<!--c-->\n\n"
        );
    }

    #[test]
    fn test_rule_error_propagates() {
        let options = Options::default().with_rule(Rule::for_tag("p", |_, _, _, _, _| {
            Err(crate::ConvertError::Rule("refused".to_string()))
        }));
        let err = convert_node(&make_p("x"), &options).unwrap_err();
        assert_eq!(err.to_string(), "rule failed: refused");
    }

    #[cfg(feature = "html")]
    mod streams {
        use super::*;
        use std::io::{self, Cursor, Read, Write};

        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }

        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        #[test]
        fn test_convert_stream() {
            let mut out = Vec::new();
            convert(&mut out, Cursor::new("<p>Hello <b>World</b></p>"), &Options::default()).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "Hello **World**\n\n\n");
        }

        #[test]
        fn test_invalid_utf8_is_replaced() {
            let mut out = Vec::new();
            convert(&mut out, Cursor::new(b"a\xffb".to_vec()), &Options::default()).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "a\u{fffd}b\n");
        }

        #[test]
        fn test_read_failure() {
            let err = convert(Vec::new(), FailingReader, &Options::default()).unwrap_err();
            assert!(matches!(err, ConvertError::Parse(_)));
        }

        #[test]
        fn test_write_failure() {
            let err = convert(FailingWriter, Cursor::new("<p>x</p>"), &Options::default()).unwrap_err();
            assert!(matches!(err, ConvertError::Write(_)));
        }
    }
}
