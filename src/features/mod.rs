//! Token feature generation for address recognition.
//!
//! A feature generator looks at one token in context and emits named
//! features (`"prefix=value"`). Generators compose through the
//! `FeatureGenerator` trait, which closures implement too.

mod street_number;

pub use street_number::{is_street_number, StreetNumberFeature};

/// Produces named features for the token at `index`.
pub trait FeatureGenerator: Send + Sync {
    /// Appends this generator's features for `tokens[index]` to `features`.
    ///
    /// An `index` outside `tokens` yields no features.
    fn create_features(&self, tokens: &[String], index: usize, features: &mut Vec<String>);
}

impl<F> FeatureGenerator for F
where
    F: Fn(&[String], usize) -> Vec<String> + Send + Sync,
{
    fn create_features(&self, tokens: &[String], index: usize, features: &mut Vec<String>) {
        if index < tokens.len() {
            features.extend(self(tokens, index));
        }
    }
}

/// Runs several generators in registration order.
#[derive(Default)]
pub struct AggregatedFeatureGenerator {
    generators: Vec<Box<dyn FeatureGenerator>>,
}

impl AggregatedFeatureGenerator {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a generator.
    pub fn with<G: FeatureGenerator + 'static>(mut self, generator: G) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether no generator is registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Collects every generator's features for `tokens[index]`.
    pub fn features(&self, tokens: &[String], index: usize) -> Vec<String> {
        let mut features = Vec::new();
        self.create_features(tokens, index, &mut features);
        features
    }
}

impl FeatureGenerator for AggregatedFeatureGenerator {
    fn create_features(&self, tokens: &[String], index: usize, features: &mut Vec<String>) {
        for generator in &self.generators {
            generator.create_features(tokens, index, features);
        }
    }
}

impl std::fmt::Debug for AggregatedFeatureGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregatedFeatureGenerator")
            .field("generators", &self.generators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn capitalized(tokens: &[String], index: usize) -> Vec<String> {
        match tokens[index].chars().next() {
            Some(c) if c.is_uppercase() => vec![format!("cap={}", tokens[index].to_lowercase())],
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_closure_is_a_generator() {
        let t = tokens(&["Hauptstraße", "5"]);
        let mut features = Vec::new();
        capitalized.create_features(&t, 0, &mut features);
        assert_eq!(features, vec!["cap=hauptstraße".to_string()]);
    }

    #[test]
    fn test_closure_out_of_range_index() {
        let t = tokens(&["Hauptstraße"]);
        let mut features = Vec::new();
        capitalized.create_features(&t, 3, &mut features);
        assert!(features.is_empty());
    }

    #[test]
    fn test_aggregate_runs_in_order() {
        let aggregate = AggregatedFeatureGenerator::new()
            .with(capitalized)
            .with(StreetNumberFeature);
        assert_eq!(aggregate.len(), 2);

        let t = tokens(&["Hauptstraße", "5"]);
        assert_eq!(
            aggregate.features(&t, 0),
            vec!["cap=hauptstraße".to_string(), "nsn=hauptstraße".to_string()]
        );
        assert_eq!(aggregate.features(&t, 1), vec!["sn=5".to_string()]);
    }

    #[test]
    fn test_aggregates_nest() {
        let inner = AggregatedFeatureGenerator::new().with(StreetNumberFeature);
        let outer = AggregatedFeatureGenerator::new().with(inner).with(capitalized);
        let t = tokens(&["12a"]);
        assert_eq!(outer.features(&t, 0), vec!["sn=12a".to_string()]);
    }

    #[test]
    fn test_empty_aggregate() {
        let aggregate = AggregatedFeatureGenerator::new();
        assert!(aggregate.is_empty());
        assert!(aggregate.features(&tokens(&["x"]), 0).is_empty());
    }
}
