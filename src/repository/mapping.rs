//! Row <-> struct mapping for the PostgreSQL tables

use sqlx::{postgres::PgRow, FromRow, Row};

use super::postgres::{PgQueryAs, PgRecord};
use crate::models::{Appointment, Barber, BarberRef, Client, ClientRef, Service, ServiceRef};

impl<'r> FromRow<'r, PgRow> for Barber {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("id_barbero")?),
            name: row.try_get("nombre")?,
        })
    }
}

impl PgRecord for Barber {
    const TABLE: &'static str = "barbero";
    const ID_COLUMN: &'static str = "id_barbero";
    const COLUMNS: &'static [&'static str] = &["nombre"];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name)
    }
}

impl<'r> FromRow<'r, PgRow> for Client {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("id_cliente")?),
            name: row.try_get("nombre")?,
            phone: row.try_get("telefono")?,
        })
    }
}

impl PgRecord for Client {
    const TABLE: &'static str = "cliente";
    const ID_COLUMN: &'static str = "id_cliente";
    const COLUMNS: &'static [&'static str] = &["nombre", "telefono"];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name).bind(&self.phone)
    }
}

impl<'r> FromRow<'r, PgRow> for Service {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("id_servicio")?),
            description: row.try_get("descripcion")?,
            cost: row.try_get("costo")?,
        })
    }
}

impl PgRecord for Service {
    const TABLE: &'static str = "servicios";
    const ID_COLUMN: &'static str = "id_servicio";
    const COLUMNS: &'static [&'static str] = &["descripcion", "costo"];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.description).bind(self.cost)
    }
}

impl<'r> FromRow<'r, PgRow> for Appointment {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("id_cita")?),
            date: row.try_get("fecha")?,
            time: row.try_get("hora")?,
            barber: BarberRef {
                id: row.try_get("id_barbero")?,
            },
            client: ClientRef {
                id: row.try_get("id_cliente")?,
            },
            service: ServiceRef {
                id: row.try_get("id_servicio")?,
            },
        })
    }
}

impl PgRecord for Appointment {
    const TABLE: &'static str = "citas";
    const ID_COLUMN: &'static str = "id_cita";
    const COLUMNS: &'static [&'static str] =
        &["fecha", "hora", "id_barbero", "id_cliente", "id_servicio"];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.date)
            .bind(&self.time)
            .bind(self.barber.id)
            .bind(self.client.id)
            .bind(self.service.id)
    }
}
