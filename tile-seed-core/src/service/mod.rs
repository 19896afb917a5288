//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod seeder;
pub mod tileset;

#[cfg(test)]
mod tileset_test;

pub use self::seeder::{PathWriter, SeedPlan, SeedStats, Seeder, TileVisitor};
pub use self::tileset::Tileset;
