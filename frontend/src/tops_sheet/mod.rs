pub mod dialog_sheet;
