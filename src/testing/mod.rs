pub(crate) mod graph_enumerator;
pub(crate) mod random_graphs;
pub(crate) mod scenarios;
