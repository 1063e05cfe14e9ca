// src/graph/cycles.rs

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::graph::index::DependencyIndex;

/// Find dependency cycles in the index.
///
/// Cycles are legal input (the resolver terminates on them), so this is only
/// used for diagnostics. Each returned group is a strongly connected set of
/// modules, either of size > 1 or a single module that lists itself.
/// Groups and their members are sorted for stable output.
pub fn find_cycles(index: &DependencyIndex) -> Vec<Vec<String>> {
    // Edge direction: module -> dependent.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for (module, dependents) in index.iter() {
        graph.add_node(module);
        for dep in dependents {
            graph.add_edge(module, dep.as_str(), ());
        }
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut members: Vec<String> = scc.into_iter().map(str::to_string).collect();
            members.sort();
            members
        })
        .collect();

    cycles.sort();
    cycles
}
