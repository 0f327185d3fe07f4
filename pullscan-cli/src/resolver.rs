//! Company-name resolution with a deterministic fallback chain.
//!
//! Priority order: local TOML table → name reported by the data provider →
//! the literal ticker. First hit wins; the last link always resolves, so a
//! display name is always available. The core engine never sees any of
//! this — names are presentation only.

use std::collections::HashMap;
use std::path::Path;

pub trait NameResolver {
    fn resolve(&self, symbol: &str) -> Option<String>;
}

/// Local ticker → name table loaded from a TOML file of `"2317.TW" = "..."`
/// entries.
#[derive(Debug, Default)]
pub struct LocalTable {
    names: HashMap<String, String>,
}

impl LocalTable {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let names: HashMap<String, String> = toml::from_str(text)?;
        Ok(Self { names })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }
}

impl NameResolver for LocalTable {
    fn resolve(&self, symbol: &str) -> Option<String> {
        self.names.get(symbol).cloned()
    }
}

/// Name the data provider reported alongside the bars, if any. Avoids a
/// second network round-trip for the common case.
#[derive(Debug)]
pub struct ProviderName {
    symbol: String,
    name: Option<String>,
}

impl ProviderName {
    pub fn new(symbol: impl Into<String>, name: Option<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name,
        }
    }
}

impl NameResolver for ProviderName {
    fn resolve(&self, symbol: &str) -> Option<String> {
        if symbol == self.symbol {
            self.name.clone()
        } else {
            None
        }
    }
}

/// Terminal link: the ticker itself. Always resolves.
#[derive(Debug, Default)]
pub struct TickerFallback;

impl NameResolver for TickerFallback {
    fn resolve(&self, symbol: &str) -> Option<String> {
        Some(symbol.to_string())
    }
}

/// First-hit-wins composition of resolvers.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn NameResolver>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// The standard chain: optional local table, then provider name, then
    /// the ticker itself.
    pub fn standard(local: Option<LocalTable>, provider: ProviderName) -> Self {
        let mut chain = Self::new();
        if let Some(local) = local {
            chain = chain.push(local);
        }
        chain.push(provider).push(TickerFallback)
    }

    pub fn resolve(&self, symbol: &str) -> Option<String> {
        self.resolvers.iter().find_map(|r| r.resolve(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_table_lookup() {
        let table = LocalTable::from_toml("\"2317.TW\" = \"Hon Hai\"\n\"AAPL\" = \"Apple\"\n").unwrap();
        assert_eq!(table.resolve("2317.TW").as_deref(), Some("Hon Hai"));
        assert_eq!(table.resolve("MSFT"), None);
    }

    #[test]
    fn provider_name_only_matches_its_symbol() {
        let provider = ProviderName::new("AAPL", Some("Apple Inc.".into()));
        assert_eq!(provider.resolve("AAPL").as_deref(), Some("Apple Inc."));
        assert_eq!(provider.resolve("MSFT"), None);
    }

    #[test]
    fn chain_prefers_local_table_over_provider() {
        let local = LocalTable::from_toml("\"AAPL\" = \"Apple (local)\"\n").unwrap();
        let provider = ProviderName::new("AAPL", Some("Apple (provider)".into()));
        let chain = ResolverChain::standard(Some(local), provider);
        assert_eq!(chain.resolve("AAPL").as_deref(), Some("Apple (local)"));
    }

    #[test]
    fn chain_falls_through_to_provider_then_ticker() {
        let provider = ProviderName::new("AAPL", Some("Apple Inc.".into()));
        let chain = ResolverChain::standard(None, provider);
        assert_eq!(chain.resolve("AAPL").as_deref(), Some("Apple Inc."));
        // Unknown everywhere → literal ticker.
        assert_eq!(chain.resolve("MSFT").as_deref(), Some("MSFT"));
    }

    #[test]
    fn chain_ticker_fallback_when_provider_has_no_name() {
        let chain = ResolverChain::standard(None, ProviderName::new("2317.TW", None));
        assert_eq!(chain.resolve("2317.TW").as_deref(), Some("2317.TW"));
    }
}
