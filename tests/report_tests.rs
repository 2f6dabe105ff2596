use sssp_engine::graph::MutableGraph;
use sssp_engine::{Dijkstra, Distance, ShortestPathTable, UndirectedGraph};

fn letter_table() -> ShortestPathTable<&'static str, u32> {
    let mut graph = UndirectedGraph::from_edges([
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
    ])
    .unwrap();
    graph.add_node("F");

    let result = Dijkstra::new().run(&graph, &"A").unwrap();
    ShortestPathTable::from_result(&result)
}

#[test]
fn test_rows_sorted_by_label() {
    let table = letter_table();
    let labels: Vec<&str> = table.rows.iter().map(|row| row.node).collect();

    assert_eq!(table.source, "A");
    assert_eq!(labels, vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_rows_carry_distances_and_paths() {
    let table = letter_table();

    let e = table.row(&"E").unwrap();
    assert_eq!(e.distance, Distance::Finite(10));
    assert_eq!(e.path, vec!["A", "C", "B", "D", "E"]);

    let f = table.row(&"F").unwrap();
    assert_eq!(f.distance, Distance::Infinite);
    assert!(f.path.is_empty());
}

#[test]
fn test_text_rendering() {
    let text = letter_table().to_string();

    assert!(text.starts_with("Shortest paths from 'A':"));
    assert!(text.contains("A → C → B → D → E"));
    let unreachable = text.lines().find(|line| line.starts_with('F')).unwrap();
    assert!(unreachable.contains('∞'));
    assert!(unreachable.contains("unreachable"));
}

#[test]
fn test_serializes_to_json() {
    let table = letter_table();
    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["source"], "A");
    assert_eq!(json["rows"][2]["node"], "C");
    assert_eq!(json["rows"][2]["distance"]["Finite"], 2);
    assert_eq!(json["rows"][5]["distance"], "Infinite");
}
