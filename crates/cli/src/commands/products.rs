use std::io::Write;
use std::path::Path;

use tudofresco_domain::{ProductRequest, ProductResponse, ProductSearch, ProductType, UnitType};
use tudofresco_infra::UploadFile;

use crate::context::AppContext;
use crate::utils::output::Output;

pub async fn search<W: Write>(
    ctx: &AppContext,
    name: Option<String>,
    page: u32,
    per_page: u32,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let search =
        ProductSearch { page, per_page, ..ProductSearch::by_name(name.unwrap_or_default()) };
    let products = ctx.products.search(&search).await?;
    out.record(&products, |w, products| {
        if products.is_empty() {
            return writeln!(w, "No products found");
        }
        products.iter().try_for_each(|product| write_product_line(w, product))
    })
}

pub async fn create<W: Write>(
    ctx: &AppContext,
    name: String,
    unit_type: UnitType,
    product_type: ProductType,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let request = ProductRequest { name, unit_type, product_type, images: Vec::new() };
    let product = ctx.products.create(&request).await?;
    out.record(&product, |w, product| write_product_line(w, product))
}

pub async fn upload_image<W: Write>(
    ctx: &AppContext,
    product_uuid: &str,
    file: &Path,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let upload = UploadFile::from_path(file).await?;
    ctx.products.upload_image(product_uuid, upload).await?;
    out.message(format_args!("Image uploaded for product {product_uuid}"))
}

fn write_product_line<W: Write>(w: &mut W, product: &ProductResponse) -> std::io::Result<()> {
    writeln!(
        w,
        "{}  {}  {} ({})",
        product.meta.uuid,
        product.name,
        product.product_type.label(),
        product.unit_type.label()
    )
}
