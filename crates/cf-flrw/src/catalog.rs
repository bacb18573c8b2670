//! Literature cosmology parameter sets.
//!
//! Static configuration data, not physics: each entry records a published
//! flat-ΛCDM fit and can be realized into a model instance. The engine
//! itself never depends on this table.

use crate::cosmology::{CosmologyOptions, FlrwCosmology};
use crate::error::FlrwResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmologyCatalogEntry {
    pub name: &'static str,
    pub reference: &'static str,
    /// Hubble constant [km/s/Mpc]
    pub h0: f64,
    /// Matter density fraction at z = 0
    pub om0: f64,
    /// CMB temperature [K]
    pub tcmb0: f64,
    /// Effective number of neutrino species
    pub neff: f64,
}

impl CosmologyCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_ascii_lowercase().contains(&query)
            || self.reference.to_ascii_lowercase().contains(&query)
    }

    /// Construct the flat-ΛCDM model this entry describes.
    pub fn realize(&self) -> FlrwResult<FlrwCosmology> {
        FlrwCosmology::flat_lambda_cdm(
            self.h0,
            self.om0,
            &CosmologyOptions {
                tcmb0: self.tcmb0,
                neff: self.neff,
            },
        )
    }
}

const LITERATURE_CATALOG: [CosmologyCatalogEntry; 6] = [
    CosmologyCatalogEntry {
        name: "WMAP5",
        reference: "Komatsu et al. 2009, ApJS, 180, 330 (table 1, WMAP+BAO+SN)",
        h0: 70.2,
        om0: 0.277,
        tcmb0: 2.725,
        neff: 3.04,
    },
    CosmologyCatalogEntry {
        name: "WMAP7",
        reference: "Komatsu et al. 2011, ApJS, 192, 18 (table 1, WMAP+BAO+H0)",
        h0: 70.4,
        om0: 0.272,
        tcmb0: 2.725,
        neff: 3.04,
    },
    CosmologyCatalogEntry {
        name: "WMAP9",
        reference: "Hinshaw et al. 2013, ApJS, 208, 19 (table 4, WMAP9+eCMB+BAO+H0)",
        h0: 69.32,
        om0: 0.2865,
        tcmb0: 2.725,
        neff: 3.04,
    },
    CosmologyCatalogEntry {
        name: "Planck13",
        reference: "Planck Collaboration 2014, A&A, 571, A16 (paper XVI, table 5)",
        h0: 67.77,
        om0: 0.30712,
        tcmb0: 2.7255,
        neff: 3.046,
    },
    CosmologyCatalogEntry {
        name: "Planck15",
        reference: "Planck Collaboration 2016, A&A, 594, A13 (paper XIII, table 4)",
        h0: 67.74,
        om0: 0.3075,
        tcmb0: 2.7255,
        neff: 3.046,
    },
    CosmologyCatalogEntry {
        name: "Planck18",
        reference: "Planck Collaboration 2020, A&A, 641, A6 (paper VI, table 2)",
        h0: 67.66,
        om0: 0.30966,
        tcmb0: 2.7255,
        neff: 3.046,
    },
];

pub fn literature_catalog() -> &'static [CosmologyCatalogEntry] {
    &LITERATURE_CATALOG
}

pub fn filter_literature_catalog(query: &str) -> Vec<CosmologyCatalogEntry> {
    literature_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
