use super::{XmlElement, XmlNode};
use crate::error::XmlError;
use ahash::AHashMap;

/// Recursive-descent reader over a UTF-8 document.
///
/// Positions are byte offsets. The reader only ever advances past ASCII
/// bytes or whole substrings, so every offset it slices at is a character
/// boundary.
pub(super) struct Reader<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// In-scope `xmlns` declarations, innermost last. The empty prefix is
    /// the default namespace; an empty URI un-declares it.
    scopes: Vec<AHashMap<String, String>>,
}

impl<'a> Reader<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            scopes: Vec::new(),
        }
    }

    pub(super) fn parse_document(mut self) -> Result<XmlElement, XmlError> {
        self.skip_misc()?;
        if self.at_end() {
            return Err(XmlError::MissingRoot);
        }
        if self.peek() != Some(b'<') {
            return Err(XmlError::Malformed {
                message: "expected element start '<'".to_string(),
                position: self.pos,
            });
        }
        let root = self.parse_element()?;
        self.skip_misc()?;
        if !self.at_end() {
            return Err(XmlError::TrailingContent { position: self.pos });
        }
        Ok(root)
    }

    /// Skips whitespace, comments, processing instructions (including the
    /// XML declaration) and any DOCTYPE.
    fn skip_misc(&mut self) -> Result<(), XmlError> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.starts_with("<?") {
                self.skip_past("?>")?;
            } else if self.starts_with("<!") {
                self.skip_past(">")?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_element(&mut self) -> Result<XmlElement, XmlError> {
        self.expect(b'<')?;
        let name = self.read_name()?;

        let mut attributes = AHashMap::new();
        let self_closing = loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(XmlError::UnexpectedEof { position: self.pos }),
                Some(b'>') => {
                    self.pos += 1;
                    break false;
                }
                Some(b'/') => {
                    self.pos += 1;
                    self.expect(b'>')?;
                    break true;
                }
                Some(_) => {
                    let attr_name = self.read_name()?;
                    self.skip_whitespace();
                    self.expect(b'=')?;
                    self.skip_whitespace();
                    let value = self.read_attribute_value()?;
                    attributes.insert(attr_name, value);
                }
            }
        };

        self.push_namespace_scope(&attributes);
        let (prefix, local_name) = split_qualified_name(&name);
        let namespace = self.resolve_namespace(prefix);

        let mut element = XmlElement {
            name: name.clone(),
            local_name,
            namespace,
            attributes,
            children: Vec::new(),
        };

        if self_closing {
            self.scopes.pop();
            return Ok(element);
        }

        loop {
            if self.at_end() {
                return Err(XmlError::UnexpectedEof { position: self.pos });
            }
            if self.starts_with("</") {
                let close_pos = self.pos;
                self.pos += 2;
                let closing = self.read_name()?;
                self.skip_whitespace();
                self.expect(b'>')?;
                if closing != name {
                    return Err(XmlError::MismatchedTag {
                        expected: name,
                        found: closing,
                        position: close_pos,
                    });
                }
                self.scopes.pop();
                return Ok(element);
            } else if self.starts_with("<!--") {
                self.skip_past("-->")?;
            } else if self.starts_with("<![CDATA[") {
                let raw = self.read_cdata()?;
                push_text(&mut element, raw);
            } else if self.starts_with("<?") {
                self.skip_past("?>")?;
            } else if self.peek() == Some(b'<') {
                let child = self.parse_element()?;
                element.children.push(XmlNode::Element(child));
            } else {
                let text = self.read_text()?;
                push_text(&mut element, text);
            }
        }
    }

    /// Reads character data up to the next markup, decoding entities.
    fn read_text(&mut self) -> Result<String, XmlError> {
        let mut text = String::new();
        loop {
            let rest = &self.text[self.pos..];
            let run = rest.find(['<', '&']).unwrap_or(rest.len());
            text.push_str(&rest[..run]);
            self.pos += run;
            match self.peek() {
                Some(b'&') => text.push(self.read_entity()?),
                _ => return Ok(text),
            }
        }
    }

    fn read_attribute_value(&mut self) -> Result<String, XmlError> {
        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q as char,
            Some(_) => {
                return Err(XmlError::Malformed {
                    message: "expected quoted attribute value".to_string(),
                    position: self.pos,
                });
            }
            None => return Err(XmlError::UnexpectedEof { position: self.pos }),
        };
        self.pos += 1;

        let mut value = String::new();
        loop {
            let rest = &self.text[self.pos..];
            let run = rest.find([quote, '&']).unwrap_or(rest.len());
            value.push_str(&rest[..run]);
            self.pos += run;
            match self.peek() {
                Some(b'&') => value.push(self.read_entity()?),
                Some(_) => {
                    self.pos += 1; // closing quote
                    return Ok(value);
                }
                None => return Err(XmlError::UnexpectedEof { position: self.pos }),
            }
        }
    }

    /// Decodes one entity reference starting at `&`. The five predefined
    /// entities and decimal/hex character references are supported.
    fn read_entity(&mut self) -> Result<char, XmlError> {
        let position = self.pos;
        let rest = &self.bytes[self.pos + 1..];
        let semicolon = rest.iter().take(32).position(|&b| b == b';');
        let Some(semicolon) = semicolon else {
            let glimpse = &rest[..rest.len().min(16)];
            return Err(XmlError::InvalidEntity {
                entity: String::from_utf8_lossy(glimpse).into_owned(),
                position,
            });
        };

        let entity = String::from_utf8_lossy(&rest[..semicolon]).into_owned();
        self.pos += 1 + semicolon + 1;

        let decoded = match entity.as_str() {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => {
                if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse::<u32>().ok().and_then(char::from_u32)
                } else {
                    None
                }
            }
        };

        decoded.ok_or(XmlError::InvalidEntity { entity, position })
    }

    fn read_cdata(&mut self) -> Result<String, XmlError> {
        self.pos += "<![CDATA[".len();
        let rest = &self.text[self.pos..];
        let Some(end) = rest.find("]]>") else {
            return Err(XmlError::UnexpectedEof {
                position: self.text.len(),
            });
        };
        let raw = rest[..end].to_string();
        self.pos += end + "]]>".len();
        Ok(raw)
    }

    /// Reads a tag or attribute name (ASCII letters, digits, `_:-.`).
    fn read_name(&mut self) -> Result<String, XmlError> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b':' | b'-' | b'.') {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(XmlError::Malformed {
                message: "expected a name".to_string(),
                position: start,
            });
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn push_namespace_scope(&mut self, attributes: &AHashMap<String, String>) {
        let mut scope = AHashMap::new();
        for (attr, value) in attributes {
            if attr == "xmlns" {
                scope.insert(String::new(), value.clone());
            } else if let Some(prefix) = attr.strip_prefix("xmlns:") {
                scope.insert(prefix.to_string(), value.clone());
            }
        }
        self.scopes.push(scope);
    }

    /// Resolves a prefix against the innermost declaration. Unbound
    /// prefixes resolve to no namespace rather than failing.
    fn resolve_namespace(&self, prefix: Option<&str>) -> Option<String> {
        let key = prefix.unwrap_or("");
        for scope in self.scopes.iter().rev() {
            if let Some(uri) = scope.get(key) {
                return if uri.is_empty() {
                    None
                } else {
                    Some(uri.clone())
                };
            }
        }
        None
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Advances past the next occurrence of `needle`, inclusive.
    fn skip_past(&mut self, needle: &str) -> Result<(), XmlError> {
        match self.text[self.pos..].find(needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                Ok(())
            }
            None => Err(XmlError::UnexpectedEof {
                position: self.text.len(),
            }),
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), XmlError> {
        match self.peek() {
            Some(found) if found == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(XmlError::Malformed {
                message: format!("expected '{}'", byte as char),
                position: self.pos,
            }),
            None => Err(XmlError::UnexpectedEof { position: self.pos }),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.bytes[self.pos..].starts_with(prefix.as_bytes())
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}

fn split_qualified_name(name: &str) -> (Option<&str>, String) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local.to_string()),
        None => (None, name.to_string()),
    }
}

fn push_text(element: &mut XmlElement, text: String) {
    if text.is_empty() {
        return;
    }
    if let Some(XmlNode::Text(last)) = element.children.last_mut() {
        last.push_str(&text);
    } else {
        element.children.push(XmlNode::Text(text));
    }
}
