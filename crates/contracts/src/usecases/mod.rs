pub mod u101_process_pdf;
