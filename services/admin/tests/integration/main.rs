mod billboard_test;
mod checkout_test;
mod helpers;
mod product_test;
mod size_color_test;
