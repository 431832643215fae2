//! Built-in catalog declarations for the walletD documentation home page.
//!
//! These are the static tables the site ships with. A `catalog.toml` can
//! replace either one through `[[guides.entries]]` / `[[libraries.entries]]`
//! (see [`crate::config`]); both paths go through the same
//! [`Catalog::load`](crate::catalog::Catalog::load) validation.

use crate::catalog::EntryDeclaration;

/// Guides shown under the "Guides" heading, in reading order.
pub fn guides() -> Vec<EntryDeclaration> {
    vec![
        EntryDeclaration::new("mnemonics", "/mnemonics", "Mnemonics")
            .with_summary("Learn how to use mnemonics in walletD."),
        EntryDeclaration::new("hd_key", "/hd_key", "HD Key").with_summary(
            "Understand how a hierarchical deterministic key works, and how to use it in walletD.",
        ),
        EntryDeclaration::new("bitcoin_wallet", "/bitcoin_wallet", "Bitcoin Wallet")
            .with_summary("Learn how to use walletD to implement a Bitcoin wallet."),
        EntryDeclaration::new("ethereum_wallet", "/ethereum_wallet", "Ethereum Wallet")
            .with_summary("Learn how to use walletD to implement an Ethereum wallet."),
        EntryDeclaration::new("walletd_guide", "/walletd_guide", "WalletD Overview")
            .with_summary("Learn how to use walletD at high level."),
    ]
}

/// Crates shown under "Official Rust Crates". Only the umbrella crate is
/// published so far; the rest link to the section placeholder.
pub fn libraries() -> Vec<EntryDeclaration> {
    vec![
        EntryDeclaration::new("walletd", "https://crates.io", "walletd")
            .with_summary("The umbrella crate: wallets, keys and blockchain clients in one place."),
        EntryDeclaration::new("walletd_bitcoin", "#", "walletd_bitcoin")
            .with_summary("Bitcoin wallet support: addresses, transactions and blockchain access."),
        EntryDeclaration::new("walletd_coin_core", "#", "walletd_coin_core")
            .with_summary("Traits and types shared by every coin implementation."),
        EntryDeclaration::new("walletd_mnemonics_core", "#", "walletd_mnemonics_core")
            .with_summary("Common interface for mnemonic phrase schemes."),
        EntryDeclaration::new("walletd_ethereum", "#", "walletd_ethereum")
            .with_summary("Ethereum wallet support built on the walletD core traits."),
        EntryDeclaration::new("walletd_hd_key", "#", "walletd_hd_key")
            .with_summary("Hierarchical deterministic key derivation (BIP32)."),
        EntryDeclaration::new("walletd_bip39", "#", "walletd_bip39")
            .with_summary("BIP39 mnemonic phrase generation and seed recovery."),
    ]
}
