use grid_paper::config::Configuration;
use grid_paper::delivery::BlobStore;
use grid_paper::DOCUMENT_FILENAME;

fn main() {
    // configure the grid the same way the paper form would, one field at a time
    let mut config = Configuration::default();
    for (field, value) in [
        ("paper", "Tabloid"),
        ("margin", "0.25"),
        ("d", "0.25"),
        ("color", "#1E90FF"),
        ("type", "Dot"),
        ("num_pages", "4"),
    ] {
        if let Err(err) = config.apply_field(field, value) {
            eprintln!("can't set {field} to {value}: {err}");
            std::process::exit(1);
        }
    }

    let pdf = config.request().unwrap().render().unwrap();

    // park the document for "download" and save it to the working directory
    let mut store = BlobStore::default();
    let handle = store.create(DOCUMENT_FILENAME, pdf);
    let path = store.save(handle, ".").unwrap();
    println!("saved {}", path.display());
    store.revoke(handle);
}
