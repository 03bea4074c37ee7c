use reginald_core::{create_database, database, list_databases, CompileQuery, Result};

fn main() -> Result<()> {
    // Top-level database administration
    let create = create_database("blog")?;
    println!("CREATE_DB envelope: {}", create.compile().to_json()?);

    let list = list_databases();
    println!("LIST_DBS envelope: {}", list.compile().to_json()?);

    // Table administration scoped to a database reference
    let blog = database("blog")?;

    let posts = blog.create("posts")?; // primary key defaults to "id"
    println!("CREATE_TABLE envelope: {}", posts.compile().to_json()?);

    let users = blog.create(("users", "uid"))?; // explicit primary key
    println!("CREATE_TABLE envelope: {}", users.compile().to_json()?);

    let tables = blog.list();
    println!("LIST_TABLES envelope: {}", tables.compile().to_json()?);

    let drop = blog.drop("posts")?;
    println!("DROP_TABLE envelope: {}", drop.compile().to_json()?);

    // A table handle is where the data query language begins
    let handle = blog.table("users")?;
    println!("table handle: {}.{}", handle.db_name(), handle.name());

    Ok(())
}
