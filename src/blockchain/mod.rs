pub mod ethereum;
pub mod probe;
pub mod traits;
pub mod wallet;

pub use ethereum::EthereumClient;
pub use traits::{ChainSource, WalletSource};
pub use wallet::WalletConnector;
