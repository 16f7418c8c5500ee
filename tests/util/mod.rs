pub mod charwise;
