//! Plain-text rendering of records on stdout.

use std::io::{self, Write};

use pagination::Pagination;

use crate::domain::{
    AdminUser, Catalog, Collection, Contact, DashboardStats, Review, Saree, StoreSettings,
    Testimonial,
};

/// Left-aligned table with columns sized to their widest cell.
#[derive(Debug)]
pub(super) struct Table {
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(super) fn new(header: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            header: header.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    pub(super) fn row(&mut self, cells: impl IntoIterator<Item = String>) {
        self.rows.push(cells.into_iter().collect());
    }

    pub(super) fn write(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return writeln!(out, "(none)");
        }
        let mut widths: Vec<usize> = self.header.iter().map(|cell| cell.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let header: Vec<String> = self.header.iter().map(|cell| (*cell).to_owned()).collect();
        write_line(out, &header, &widths)?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(out: &mut dyn Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

fn flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_owned()
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or("-")
        .to_owned()
}

pub(super) fn user(out: &mut dyn Write, user: &AdminUser) -> io::Result<()> {
    writeln!(out, "{} <{}>", user.display_name(), user.email)?;
    writeln!(out, "id:   {}", user.id)?;
    writeln!(out, "role: {}", or_dash(Some(&user.role)))
}

pub(super) fn dashboard(out: &mut dyn Write, stats: &DashboardStats) -> io::Result<()> {
    let mut table = Table::new(["METRIC", "VALUE"]);
    for (key, value) in stats.entries() {
        table.row([key.to_owned(), value]);
    }
    table.write(out)
}

pub(super) fn sarees<'a>(
    out: &mut dyn Write,
    sarees: impl IntoIterator<Item = (&'a Saree, Option<&'a str>)>,
) -> io::Result<()> {
    let mut table = Table::new(["ID", "NAME", "PRICE", "CATALOG", "FABRIC", "COLOUR"]);
    for (saree, catalog) in sarees {
        table.row([
            saree.id.clone(),
            saree.name.clone(),
            format!("{:.2}", saree.price),
            or_dash(catalog),
            or_dash(Some(&saree.fabric)),
            or_dash(Some(&saree.color)),
        ]);
    }
    table.write(out)
}

pub(super) fn collections(out: &mut dyn Write, collections: &[Collection]) -> io::Result<()> {
    let mut table = Table::new(["ID", "NAME", "SAREES", "FEATURED"]);
    for collection in collections {
        table.row([
            collection.id.clone(),
            collection.name.clone(),
            collection.saree_count.to_string(),
            flag(collection.featured),
        ]);
    }
    table.write(out)
}

pub(super) fn catalogs<'a>(
    out: &mut dyn Write,
    catalogs: impl IntoIterator<Item = (&'a Catalog, bool)>,
) -> io::Result<()> {
    let mut expanded = Vec::new();
    let mut table = Table::new(["ID", "NAME", "STATUS", "SAREES"]);
    for (catalog, is_expanded) in catalogs {
        table.row([
            catalog.id.clone(),
            catalog.name.clone(),
            catalog.status.to_string(),
            format!("{}/{}", catalog.members.len(), crate::domain::CATALOG_CAPACITY),
        ]);
        if is_expanded {
            expanded.push(catalog);
        }
    }
    table.write(out)?;
    for catalog in expanded {
        writeln!(out)?;
        writeln!(out, "{} ({})", catalog.name, catalog.id)?;
        if catalog.members.is_empty() {
            writeln!(out, "  no sarees")?;
        }
        for member in &catalog.members {
            match member.name() {
                Some(name) => writeln!(out, "  {} {name}", member.id())?,
                None => writeln!(out, "  {}", member.id())?,
            }
        }
    }
    Ok(())
}

pub(super) fn testimonials<'a>(
    out: &mut dyn Write,
    testimonials: impl IntoIterator<Item = &'a Testimonial>,
) -> io::Result<()> {
    let mut table = Table::new(["ID", "NAME", "RATING", "ACTIVE", "FEATURED", "REVIEW"]);
    for testimonial in testimonials {
        table.row([
            testimonial.id.clone(),
            testimonial.name.clone(),
            testimonial.rating.to_string(),
            flag(testimonial.is_active),
            flag(testimonial.is_featured),
            testimonial.review.clone(),
        ]);
    }
    table.write(out)
}

pub(super) fn reviews<'a>(
    out: &mut dyn Write,
    reviews: impl IntoIterator<Item = &'a Review>,
) -> io::Result<()> {
    let mut table = Table::new(["ID", "NAME", "PRODUCT", "RATING", "APPROVED", "FEATURED"]);
    for review in reviews {
        table.row([
            review.id.clone(),
            review.name.clone(),
            review.product_label().to_owned(),
            review.rating.to_string(),
            flag(review.is_approved),
            flag(review.is_featured),
        ]);
    }
    table.write(out)
}

pub(super) fn contacts<'a>(
    out: &mut dyn Write,
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> io::Result<()> {
    let mut table = Table::new(["ID", "NAME", "EMAIL", "SUBJECT", "STATUS"]);
    for contact in contacts {
        table.row([
            contact.id.clone(),
            contact.name.clone(),
            contact.email.clone(),
            or_dash(contact.subject.as_deref()),
            contact.status.to_string(),
        ]);
    }
    table.write(out)
}

pub(super) fn contact(out: &mut dyn Write, contact: &Contact) -> io::Result<()> {
    writeln!(out, "from:    {} <{}>", contact.name, contact.email)?;
    writeln!(out, "phone:   {}", or_dash(contact.phone.as_deref()))?;
    writeln!(out, "subject: {}", or_dash(contact.subject.as_deref()))?;
    writeln!(out, "status:  {}", contact.status)?;
    writeln!(out, "note:    {}", or_dash(contact.note.as_deref()))?;
    writeln!(out)?;
    writeln!(out, "{}", contact.message)
}

pub(super) fn settings(out: &mut dyn Write, settings: &StoreSettings) -> io::Result<()> {
    let mut table = Table::new(["SETTING", "VALUE"]);
    for (key, value) in [
        ("storeName", &settings.store_name),
        ("tagline", &settings.tagline),
        ("email", &settings.email),
        ("phone", &settings.phone),
        ("address", &settings.address),
        ("whatsapp", &settings.whatsapp),
    ] {
        table.row([key.to_owned(), or_dash(Some(value))]);
    }
    table.write(out)
}

pub(super) fn pagination(out: &mut dyn Write, pagination: Option<&Pagination>) -> io::Result<()> {
    match pagination {
        Some(pagination) => writeln!(
            out,
            "page {} of {} ({} total)",
            pagination.page, pagination.pages, pagination.total
        ),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(table: &Table) -> String {
        let mut out = Vec::new();
        table.write(&mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let mut table = Table::new(["ID", "NAME"]);
        table.row(["s1".to_owned(), "Kanjivaram".to_owned()]);
        table.row(["s10".to_owned(), "Tant".to_owned()]);
        assert_eq!(rendered(&table), "ID   NAME\ns1   Kanjivaram\ns10  Tant\n");
    }

    #[test]
    fn empty_tables_say_so() {
        assert_eq!(rendered(&Table::new(["ID"])), "(none)\n");
    }

    #[test]
    fn pagination_footer_is_optional() {
        let mut out = Vec::new();
        pagination(&mut out, None).expect("write");
        pagination(
            &mut out,
            Some(&Pagination {
                total: 25,
                page: 2,
                pages: 3,
            }),
        )
        .expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "page 2 of 3 (25 total)\n");
    }
}
