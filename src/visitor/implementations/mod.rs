mod infallible;
mod unit_tuple;
