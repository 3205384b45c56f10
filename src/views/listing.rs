//! Vista del listado de inventario: una tarjeta por vehículo.
//! El buscador y el selector de orden son decorativos.

use crate::models::vehicle::VehicleRecord;
use crate::views::{html_escape, page_html};

pub fn listing_html(vehicles: &[VehicleRecord]) -> String {
    let cards: String = vehicles.iter().map(card_html).collect();

    let body = format!(
        r#"<header>
  <div>
    <h1>AutoMax Motors</h1>
    <p class="muted">Premium Pre-Owned Vehicles</p>
  </div>
  <div class="toolbar">
    <input type="search" placeholder="Search inventory..." disabled>
    <button type="button" class="secondary" disabled>Filters</button>
  </div>
</header>
<section>
  <div class="section-head">
    <div>
      <h2>Available Inventory</h2>
      <p class="muted">{count} vehicles found</p>
    </div>
    <select disabled>
      <option>Sort by: Featured</option>
      <option>Price: Low to High</option>
      <option>Price: High to Low</option>
      <option>Mileage: Low to High</option>
      <option>Year: Newest</option>
    </select>
  </div>
  <div class="grid">
{cards}
  </div>
</section>"#,
        count = vehicles.len(),
        cards = cards
    );

    page_html("AutoMax Motors", &body)
}

fn card_html(vehicle: &VehicleRecord) -> String {
    format!(
        r#"    <article class="card" id="vehicle-{stock}">
      <img src="{image}" alt="{title}">
      <div class="body">
        <h3>{title}</h3>
        <p class="accent">{trim}</p>
        <div class="specs muted">
          <span>{mileage}</span>
          <span>{fuel}</span>
          <span>{color}</span>
        </div>
        <div class="foot">
          <div>
            <p class="tiny">Starting at</p>
            <p class="price">{price}</p>
          </div>
          <form method="post" action="/quotes">
            <input type="hidden" name="stock_number" value="{stock}">
            <button type="submit">Get Today&#39;s Price</button>
          </form>
        </div>
        <p class="tiny">Stock # {stock}</p>
      </div>
    </article>
"#,
        stock = html_escape(&vehicle.stock_number),
        image = html_escape(vehicle.image_or_placeholder()),
        title = html_escape(&vehicle.title()),
        trim = html_escape(&vehicle.trim),
        mileage = html_escape(&vehicle.mileage),
        fuel = html_escape(&vehicle.fuel_type),
        color = html_escape(&vehicle.color),
        price = html_escape(&vehicle.price),
    )
}
