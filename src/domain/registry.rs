//! Converter rules and the registry that resolves exactly one of them per kind.

use std::fmt;

use tracing::{debug, error};

use crate::domain::converter::{Converter, PrimitiveConverter, TextConverter};
use crate::domain::error::ConverterRegistryError;
use crate::domain::ValueKind;

type Predicate = Box<dyn Fn(ValueKind) -> bool + Send + Sync>;
type Factory = Box<dyn Fn(ValueKind, &ConverterRegistry) -> Box<dyn Converter> + Send + Sync>;

/// Something a rule's factory needs in order to build its converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// Back-reference to the registry itself, passed to every factory.
    Registry,
    /// Any other collaborator. The registry cannot provide these.
    Service(String),
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::Registry => f.write_str("converter registry"),
            Dependency::Service(name) => f.write_str(name),
        }
    }
}

/// A predicate over value kinds paired with a converter factory.
pub struct ConversionRule {
    name: String,
    predicate: Predicate,
    dependencies: Vec<Dependency>,
    factory: Factory,
}

impl ConversionRule {
    pub fn new<P, F, C>(name: impl Into<String>, predicate: P, factory: F) -> Self
    where
        P: Fn(ValueKind) -> bool + Send + Sync + 'static,
        F: Fn(ValueKind, &ConverterRegistry) -> C + Send + Sync + 'static,
        C: Converter + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            dependencies: Vec::new(),
            factory: Box::new(
                move |kind: ValueKind, registry: &ConverterRegistry| -> Box<dyn Converter> {
                    Box::new(factory(kind, registry))
                },
            ),
        }
    }

    /// Declare a dependency of the factory.
    pub fn requires(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, kind: ValueKind) -> bool {
        (self.predicate)(kind)
    }
}

impl fmt::Debug for ConversionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRule")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// Collects rules; dependencies are checked once in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ConverterRegistryBuilder {
    rules: Vec<ConversionRule>,
}

impl ConverterRegistryBuilder {
    pub fn rule(mut self, rule: ConversionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Result<ConverterRegistry, ConverterRegistryError> {
        for rule in &self.rules {
            if let Some(dependency) = rule
                .dependencies
                .iter()
                .find(|d| **d != Dependency::Registry)
            {
                error!(
                    "converter rule '{}' needs unresolvable dependency '{}'",
                    rule.name, dependency
                );
                return Err(ConverterRegistryError::UnresolvedConverterDependency(
                    dependency.to_string(),
                ));
            }
        }
        Ok(ConverterRegistry { rules: self.rules })
    }
}

/// Read-only rule set. Converters are created per lookup, never cached.
#[derive(Debug)]
pub struct ConverterRegistry {
    rules: Vec<ConversionRule>,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ConverterRegistry {
    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder::default()
    }

    /// Registry with the built-in rules: every primitive kind, and text.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ConversionRule::new("primitive", ValueKind::is_primitive, |kind, _| {
                    PrimitiveConverter::new(kind)
                }),
                ConversionRule::new("text", |kind| kind == ValueKind::Text, |_, _| TextConverter),
            ],
        }
    }

    pub fn rules(&self) -> &[ConversionRule] {
        &self.rules
    }

    /// Resolve the one converter applicable to `kind`.
    ///
    /// More than one matching rule is a configuration defect, reported as
    /// [`ConverterRegistryError::AmbiguousConverterRules`].
    pub fn resolve(&self, kind: ValueKind) -> Result<Box<dyn Converter>, ConverterRegistryError> {
        let matching: Vec<&ConversionRule> =
            self.rules.iter().filter(|rule| rule.matches(kind)).collect();

        match matching.as_slice() {
            [] => Err(ConverterRegistryError::NoApplicableConverter(kind)),
            [rule] => {
                debug!("resolve: {} -> rule '{}'", kind, rule.name);
                Ok((rule.factory)(kind, self))
            }
            _ => {
                error!("resolve: {} rules match kind {}", matching.len(), kind);
                Err(ConverterRegistryError::AmbiguousConverterRules {
                    kind,
                    count: matching.len(),
                })
            }
        }
    }
}
