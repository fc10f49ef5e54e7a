//! Binding service
//!
//! Populates a fresh command instance from parsed arguments, collecting every
//! failure instead of stopping at the first.

use tracing::{debug, error, instrument, trace};

use crate::domain::{
    CommandSchema, ConverterRegistry, FailureChain, FailureRecord, OptionBinding, Outcome,
    ParsedArguments, Value,
};

/// Binds parsed arguments to command types using a converter registry.
#[derive(Debug, Clone, Copy)]
pub struct Binder<'r> {
    converters: &'r ConverterRegistry,
}

impl<'r> Binder<'r> {
    pub fn new(converters: &'r ConverterRegistry) -> Self {
        Self { converters }
    }

    /// Bind every declared option, in declaration order.
    ///
    /// Returns the populated command only if no option failed; otherwise the
    /// partially written instance is dropped and all failures are returned.
    ///
    /// Every option kind of `schema` must already resolve to exactly one rule
    /// of the converter registry; [`RegistryBuilder`](crate::application::RegistryBuilder)
    /// checks this at registration. If a kind does not resolve, the option is
    /// reported as a conversion failure and the defect is logged at error level.
    #[instrument(level = "debug", skip_all, fields(verb = schema.verb()))]
    pub fn bind<C: Default>(
        &self,
        schema: &CommandSchema<C>,
        parsed: &ParsedArguments,
    ) -> Result<C, FailureChain> {
        let mut command = C::default();
        let outcome = schema
            .options()
            .iter()
            .fold(Outcome::Success, |outcome, binding| {
                outcome.merge(self.bind_option(&mut command, binding, parsed))
            });

        if let Outcome::Failure(chain) = &outcome {
            debug!("bind: {} failure(s)", chain.len());
        }
        outcome.into_result(command)
    }

    fn bind_option<C>(
        &self,
        command: &mut C,
        binding: &OptionBinding<C>,
        parsed: &ParsedArguments,
    ) -> Outcome {
        let descriptor = binding.descriptor();

        // short key wins over long key
        let mut values = parsed.values(&descriptor.short_key());
        if values.is_empty() {
            values = parsed.values(&descriptor.long);
        }

        if values.is_empty() {
            if descriptor.required {
                debug!("bind: missing required option {}", descriptor.signature());
                return Outcome::failure(FailureRecord::MissingRequiredOption {
                    option: descriptor.clone(),
                });
            }
            trace!("bind: {} absent, keeping default", descriptor.signature());
            return Outcome::Success;
        }

        let written = self
            .convert(binding, values)
            .and_then(|value| binding.apply(command, value).map_err(|e| e.to_string()));

        match written {
            Ok(()) => {
                trace!("bind: {} <- {:?}", descriptor.signature(), values);
                Outcome::Success
            }
            Err(message) => {
                debug!("bind: {} failed: {}", descriptor.signature(), message);
                Outcome::failure(FailureRecord::PropertyConversionFailure {
                    option: descriptor.clone(),
                    message,
                })
            }
        }
    }

    fn convert<C>(&self, binding: &OptionBinding<C>, values: &[String]) -> Result<Value, String> {
        let kind = binding.descriptor().kind;
        let converter = self.converters.resolve(kind).map_err(|e| {
            // registration validates kinds, so this is a setup defect
            error!("bind: no usable converter for {}: {}", kind, e);
            e.to_string()
        })?;
        converter.convert(values).map_err(|e| e.to_string())
    }
}
