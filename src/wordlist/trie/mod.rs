pub mod trie;
pub mod search;

mod node;

pub use self::node::NodeIdx;
pub use self::trie::Trie;
