use sssp_engine::{Dijkstra, Result, ShortestPathTable, UndirectedGraph};

fn print_table(
    title: &str,
    graph: &UndirectedGraph<&'static str, u32>,
    start: &'static str,
) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));

    let result = Dijkstra::new().run(graph, &start)?;
    println!("{}", ShortestPathTable::from_result(&result));

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let letters = UndirectedGraph::from_edges([
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
    ])?;

    let numbers = UndirectedGraph::from_edges([
        ("0", "1", 7),
        ("0", "2", 9),
        ("0", "5", 14),
        ("1", "2", 10),
        ("1", "3", 15),
        ("2", "3", 11),
        ("2", "5", 2),
        ("3", "4", 6),
        ("4", "5", 9),
    ])?;

    print_table("Example 1", &letters, "A")?;
    print_table("Example 2", &numbers, "0")?;

    Ok(())
}
