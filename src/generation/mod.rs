/// Clustered random scatter with an order-dependent first-stone phase
pub mod scatter;
