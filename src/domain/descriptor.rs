//! Declarative command shapes: option descriptors and command schemas.
//!
//! A schema is built once at startup with [`CommandSchema::new`] and never
//! inspected reflectively. Each option carries a setter that writes the
//! converted value into the command; the option's value kind is taken from
//! the setter's field type.

use std::collections::HashSet;
use std::fmt;

use crate::domain::error::{ConversionError, SchemaError};
use crate::domain::{FromValue, Value, ValueKind};

/// Immutable description of one option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionDescriptor {
    pub short: char,
    pub long: String,
    pub required: bool,
    pub kind: ValueKind,
    pub help: Option<String>,
}

impl OptionDescriptor {
    /// `-s(--second)`
    pub fn signature(&self) -> String {
        format!("-{}(--{})", self.short, self.long)
    }

    pub fn short_key(&self) -> String {
        self.short.to_string()
    }
}

/// Option keys and flags, before the target field is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: char,
    long: String,
    required: bool,
    help: Option<String>,
}

impl OptionSpec {
    pub fn new(short: char, long: impl Into<String>) -> Self {
        Self {
            short,
            long: long.into(),
            required: false,
            help: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

type Setter<C> = Box<dyn Fn(&mut C, Value) -> Result<(), ConversionError> + Send + Sync>;

/// An option descriptor together with the write-back into its field.
pub struct OptionBinding<C> {
    descriptor: OptionDescriptor,
    setter: Setter<C>,
}

impl<C> OptionBinding<C> {
    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    /// Write a converted value into `target`.
    pub fn apply(&self, target: &mut C, value: Value) -> Result<(), ConversionError> {
        (self.setter)(target, value)
    }
}

impl<C> fmt::Debug for OptionBinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionBinding")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Verb, help text, and ordered options of a command type `C`.
pub struct CommandSchema<C> {
    verb: String,
    help: Option<String>,
    options: Vec<OptionBinding<C>>,
}

impl<C: 'static> CommandSchema<C> {
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            help: None,
            options: Vec::new(),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Declare an option bound to a field of type `T`.
    ///
    /// ```ignore
    /// CommandSchema::<Fetch>::new("fetch")
    ///     .option(OptionSpec::new('n', "count").required(), |c, v: u32| c.count = v)
    /// ```
    pub fn option<T, F>(mut self, spec: OptionSpec, write: F) -> Self
    where
        T: FromValue + 'static,
        F: Fn(&mut C, T) + Send + Sync + 'static,
    {
        let kind = T::KIND;
        let descriptor = OptionDescriptor {
            short: spec.short,
            long: spec.long,
            required: spec.required,
            kind,
            help: spec.help,
        };
        let setter: Setter<C> = Box::new(move |target: &mut C, value: Value| {
            let found = value.kind();
            let typed = T::from_value(value).ok_or(ConversionError::KindMismatch {
                expected: kind,
                found,
            })?;
            write(target, typed);
            Ok(())
        });
        self.options.push(OptionBinding { descriptor, setter });
        self
    }
}

impl<C> CommandSchema<C> {
    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Options in declaration order.
    pub fn options(&self) -> &[OptionBinding<C>] {
        &self.options
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.iter().map(OptionBinding::descriptor)
    }

    /// Reject schemas whose keys cannot be looked up unambiguously.
    ///
    /// Short and long keys are separate namespaces; a key may be reused
    /// across them but not within one.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.verb.is_empty() {
            return Err(SchemaError::EmptyVerb);
        }
        let mut shorts = HashSet::new();
        let mut longs = HashSet::new();
        for descriptor in self.descriptors() {
            if descriptor.long.is_empty() {
                return Err(SchemaError::EmptyLongName {
                    verb: self.verb.clone(),
                    short: descriptor.short,
                });
            }
            if !shorts.insert(descriptor.short) {
                return Err(SchemaError::DuplicateShortKey {
                    verb: self.verb.clone(),
                    key: descriptor.short,
                });
            }
            if !longs.insert(descriptor.long.as_str()) {
                return Err(SchemaError::DuplicateLongKey {
                    verb: self.verb.clone(),
                    key: descriptor.long.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<C> fmt::Debug for CommandSchema<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSchema")
            .field("verb", &self.verb)
            .field("help", &self.help)
            .field("options", &self.options)
            .finish()
    }
}

/// A type that arguments can be bound to.
///
/// Fields without a declared option keep their `Default` value.
pub trait Command: Default + Send + 'static {
    fn schema() -> CommandSchema<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Probe {
        level: u8,
        name: String,
    }

    #[test]
    fn given_option_when_declared_then_kind_follows_field_type() {
        let schema = CommandSchema::<Probe>::new("probe")
            .option(OptionSpec::new('l', "level"), |p, v: u8| p.level = v)
            .option(OptionSpec::new('n', "name").required(), |p, v: String| p.name = v);

        let kinds: Vec<_> = schema.descriptors().map(|d| (d.kind, d.required)).collect();
        assert_eq!(kinds, vec![(ValueKind::U8, false), (ValueKind::Text, true)]);
    }

    #[test]
    fn given_wrong_value_kind_when_applying_then_kind_mismatch() {
        let schema = CommandSchema::<Probe>::new("probe")
            .option(OptionSpec::new('l', "level"), |p, v: u8| p.level = v);
        let mut probe = Probe::default();

        let err = schema.options()[0].apply(&mut probe, Value::I32(1)).unwrap_err();

        assert_eq!(
            err,
            ConversionError::KindMismatch {
                expected: ValueKind::U8,
                found: ValueKind::I32
            }
        );
        assert_eq!(probe.level, 0);
    }

    #[test]
    fn given_duplicate_short_key_when_validating_then_rejected() {
        let schema = CommandSchema::<Probe>::new("probe")
            .option(OptionSpec::new('l', "level"), |p, v: u8| p.level = v)
            .option(OptionSpec::new('l', "label"), |p, v: String| p.name = v);

        assert_eq!(
            schema.validate(),
            Err(SchemaError::DuplicateShortKey {
                verb: "probe".into(),
                key: 'l'
            })
        );
    }

    #[test]
    fn given_short_key_equal_to_long_key_when_validating_then_accepted() {
        let schema = CommandSchema::<Probe>::new("probe")
            .option(OptionSpec::new('l', "n"), |p, v: u8| p.level = v)
            .option(OptionSpec::new('n', "l"), |p, v: String| p.name = v);

        assert_eq!(schema.validate(), Ok(()));
    }

    #[test]
    fn given_empty_verb_when_validating_then_rejected() {
        let schema = CommandSchema::<Probe>::new("");
        assert_eq!(schema.validate(), Err(SchemaError::EmptyVerb));
    }

    #[test]
    fn given_descriptor_when_formatting_signature_then_short_and_long() {
        let schema = CommandSchema::<Probe>::new("probe")
            .option(OptionSpec::new('l', "level"), |p, v: u8| p.level = v);
        let descriptor = schema.descriptors().next().unwrap();
        assert_eq!(descriptor.signature(), "-l(--level)");
    }
}
