use serde_json::Map;
use serde_json::Value as Json;

use crate::errors::BuilderError;

/// Container currently open in the document.
#[derive(Debug)]
enum Frame {
    Array(Vec<Json>),
    Object(Map<String, Json>),
}

impl Frame {
    fn kind(&self) -> &'static str {
        match self {
            Frame::Array(_) => "array",
            Frame::Object(_) => "object",
        }
    }
}

/// Incrementally build a JSON document one container or field at a time.
///
/// Fields appear in the document in the order they are added to the builder.
/// Every container opened must be closed, innermost first, before the document is built.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    root: Option<Json>,
    stack: Vec<(Option<String>, Frame)>,
}

impl DocumentBuilder {
    pub fn new() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Finalise the document.
    pub fn build(self) -> Result<Json, BuilderError> {
        if !self.stack.is_empty() {
            return Err(BuilderError::Incomplete(self.stack.len()));
        }
        self.root.ok_or(BuilderError::Incomplete(0))
    }

    /// Close the innermost array.
    pub fn end_array(&mut self) -> Result<&mut Self, BuilderError> {
        match self.stack.pop() {
            None => Err(BuilderError::NothingToClose),
            Some((name, Frame::Array(items))) => {
                self.insert(name, Json::Array(items))?;
                Ok(self)
            }
            Some((name, frame)) => {
                let found = frame.kind();
                self.stack.push((name, frame));
                Err(BuilderError::MismatchedEnd {
                    expected: "array",
                    found,
                })
            }
        }
    }

    /// Close the innermost object.
    pub fn end_object(&mut self) -> Result<&mut Self, BuilderError> {
        match self.stack.pop() {
            None => Err(BuilderError::NothingToClose),
            Some((name, Frame::Object(fields))) => {
                self.insert(name, Json::Object(fields))?;
                Ok(self)
            }
            Some((name, frame)) => {
                let found = frame.kind();
                self.stack.push((name, frame));
                Err(BuilderError::MismatchedEnd {
                    expected: "object",
                    found,
                })
            }
        }
    }

    /// Add a named value to the innermost object.
    pub fn field<V>(&mut self, name: &str, value: V) -> Result<&mut Self, BuilderError>
    where
        V: Into<Json>,
    {
        self.insert(Some(name.to_string()), value.into())?;
        Ok(self)
    }

    /// Open an array as an item of the innermost array (or as the document root).
    pub fn start_array(&mut self) -> Result<&mut Self, BuilderError> {
        self.open(None, Frame::Array(Vec::new()))
    }

    /// Open an array as a field of the innermost object.
    pub fn start_named_array(&mut self, name: &str) -> Result<&mut Self, BuilderError> {
        self.open(Some(name.to_string()), Frame::Array(Vec::new()))
    }

    /// Open an object as a field of the innermost object.
    pub fn start_named_object(&mut self, name: &str) -> Result<&mut Self, BuilderError> {
        self.open(Some(name.to_string()), Frame::Object(Map::new()))
    }

    /// Open an object as an item of the innermost array (or as the document root).
    pub fn start_object(&mut self) -> Result<&mut Self, BuilderError> {
        self.open(None, Frame::Object(Map::new()))
    }

    /// Add an item to the innermost array.
    pub fn value<V>(&mut self, value: V) -> Result<&mut Self, BuilderError>
    where
        V: Into<Json>,
    {
        self.insert(None, value.into())?;
        Ok(self)
    }

    /// Ensure a value with the given name can be added at the current position.
    fn check(&self, name: Option<&str>) -> Result<(), BuilderError> {
        match (self.stack.last(), name) {
            (None, _) if self.root.is_some() => Err(BuilderError::RootComplete),
            (None, Some(name)) => Err(BuilderError::NamedRoot(name.to_string())),
            (None, None) => Ok(()),
            (Some((_, Frame::Object(_))), None) => Err(BuilderError::MissingName),
            (Some((_, Frame::Object(_))), Some(_)) => Ok(()),
            (Some((_, Frame::Array(_))), Some(name)) => {
                Err(BuilderError::NamedArrayItem(name.to_string()))
            }
            (Some((_, Frame::Array(_))), None) => Ok(()),
        }
    }

    fn insert(&mut self, name: Option<String>, value: Json) -> Result<(), BuilderError> {
        self.check(name.as_deref())?;
        match (self.stack.last_mut(), name) {
            (None, _) => self.root = Some(value),
            (Some((_, Frame::Object(fields))), Some(name)) => {
                fields.insert(name, value);
            }
            (Some((_, Frame::Array(items))), _) => items.push(value),
            (Some((_, Frame::Object(_))), None) => return Err(BuilderError::MissingName),
        }
        Ok(())
    }

    fn open(&mut self, name: Option<String>, frame: Frame) -> Result<&mut Self, BuilderError> {
        self.check(name.as_deref())?;
        self.stack.push((name, frame));
        Ok(self)
    }
}
