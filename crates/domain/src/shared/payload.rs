use std::collections::HashMap;

/// Schema-free bag of values carried by a `Transaction`. The keys are
/// declared by the `TransactionType` field list; the engine never interprets
/// them.
pub type Payload = HashMap<String, String>;
